// SPDX-License-Identifier: MPL-2.0
//! Port definitions for external collaborators.

pub mod surface;

pub use surface::{apply_command, MediaSurface, SurfaceCommand};
