// SPDX-License-Identifier: MPL-2.0
//! Per-concern sub-components of the viewer.
//!
//! Each sub-component follows the same shape: a `State` struct, a
//! `Message` enum, an `Effect` enum and a `handle` transition function.
//! The orchestrating component routes messages and cross-cutting
//! effects between them.

pub mod interaction;
pub mod playback;
pub mod rotation;
pub mod visibility;
