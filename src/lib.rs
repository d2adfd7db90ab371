// SPDX-License-Identifier: MPL-2.0
//! `media_overlay` is the control logic layered over an opaque media
//! surface: play/pause state, auto-hiding controls with timed fade
//! transitions, scrubbing, rotation of landscape sources in a portrait
//! viewport, and like/description affordances.
//!
//! The crate contains no rendering, decoding or networking. A host
//! application implements [`application::port::MediaSurface`] over its
//! platform player, forwards gestures, surface callbacks and scheduler
//! ticks to a [`ui::viewer::Viewer`] as messages, carries out the
//! returned effects, and redraws from [`ui::viewer::RenderSnapshot`].

#![doc(html_root_url = "https://docs.rs/media_overlay/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

pub use error::{Error, Result, SurfaceError};
