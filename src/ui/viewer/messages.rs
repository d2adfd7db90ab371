// SPDX-License-Identifier: MPL-2.0
//! Messages consumed and effects produced by the viewer component.

use crate::application::port::SurfaceCommand;
use std::time::Duration;

/// Everything that can happen to an open viewer: user gestures, media
/// surface callbacks, and scheduler ticks.
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // GESTURES
    // ═══════════════════════════════════════════════════════════════════════
    /// Tap on the play/pause control.
    TogglePlayback,
    /// Tap on the media surface itself (not on a specific control).
    ToggleControls,
    /// Tap on the scrub track at pixel offset `tap_x` of `track_width`.
    SeekTrack { tap_x: f32, track_width: f32 },
    /// Tap on the rotate control.
    ToggleRotation,
    /// Tap on the like control.
    ToggleLike,
    /// Tap on the description expand/collapse affordance.
    ToggleDescription,
    /// Tap on the close control.
    Close,

    // ═══════════════════════════════════════════════════════════════════════
    // SURFACE CALLBACKS
    // ═══════════════════════════════════════════════════════════════════════
    /// Surface finished loading and reported its metadata.
    SurfaceLoaded {
        duration_secs: f64,
        width: f32,
        height: f32,
    },
    /// Surface reported the current playback position.
    SurfaceProgress { position_secs: f64 },
    /// Surface buffering state changed.
    SurfaceBuffering(bool),
    /// Surface reached the end of the media.
    SurfaceEnded,
    /// Surface reported an error (free-form message).
    SurfaceError(String),

    // ═══════════════════════════════════════════════════════════════════════
    // SCHEDULER
    // ═══════════════════════════════════════════════════════════════════════
    /// Advance in-flight animations by the elapsed time.
    Tick(Duration),
}

/// Side effects the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a command to the media surface.
    Command(SurfaceCommand),
    /// Offer to open the source in an external application.
    OfferExternalOpen { uri: String },
    /// The viewer closed; all controller state is discarded.
    Closed,
}
