// SPDX-License-Identifier: MPL-2.0
//! Media viewer overlay controller.
//!
//! The [`Viewer`] component owns all controller state (playback,
//! overlay visibility, geometry, interaction) and is composed of
//! per-concern sub-components, each an explicit state machine with a
//! `handle(Message) -> Effect` transition function.

pub mod animation;
pub mod component;
pub mod messages;
pub mod snapshot;
pub mod state;
pub mod subcomponents;

pub use component::Viewer;
pub use messages::{Effect, Message};
pub use snapshot::{GeometryState, InteractionState, OverlayVisibility, RenderSnapshot};
pub use state::Viewport;
