// SPDX-License-Identifier: MPL-2.0
//! Pure domain types with no presentation dependencies.

pub mod media;
pub mod playback;
pub mod ui;
