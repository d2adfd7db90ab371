// SPDX-License-Identifier: MPL-2.0
//! Render-state snapshot emitted after every transition.
//!
//! The snapshot carries everything the presentation layer needs to
//! redraw without additional logic.

use crate::domain::media::MediaRef;
use crate::domain::playback::PlaybackState;
use crate::ui::viewer::subcomponents::interaction::DescriptionView;

/// Overlay visibility as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayVisibility {
    /// Logical target state driving the animation direction.
    pub visible: bool,
    /// Whether the control layer still exists for interaction/animation.
    pub mounted: bool,
    /// Fade progress in `[0, 1]`.
    pub animation_progress: f32,
}

/// Rotation/geometry as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryState {
    /// Whether the content is rotated 90°.
    pub rotated: bool,
    /// Whether the source is landscape (rotation offered at all).
    pub is_landscape_source: bool,
}

/// Like/description affordances as the presentation layer sees them.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Whether the user has liked the item this session.
    pub liked: bool,
    /// Like count to display, if known.
    pub displayed_like_count: Option<i64>,
    /// Whether the description is expanded.
    pub description_expanded: bool,
}

/// Full render state for one open viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// The media being viewed.
    pub media: MediaRef,
    /// Playback record (defaults for non-timeline media).
    pub playback: PlaybackState,
    /// Overlay visibility and fade progress.
    pub overlay: OverlayVisibility,
    /// Rotation/geometry.
    pub geometry: GeometryState,
    /// Like/description state.
    pub interaction: InteractionState,
    /// Description text to draw, or `None` when the media has none.
    pub description: Option<DescriptionView>,
    /// Comment count pass-through for the comment affordance.
    pub comment_count: Option<i64>,
    /// Whether the open-externally fallback is offered.
    pub offer_external_open: bool,
    /// Inline error message to surface, if any.
    pub inline_error: Option<String>,
}
