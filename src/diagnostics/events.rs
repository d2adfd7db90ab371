// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for viewer activity tracking.

use chrono::{DateTime, Utc};

use crate::application::port::SurfaceCommand;
use crate::error::SurfaceError;

/// User-initiated actions captured as breadcrumbs.
///
/// These represent meaningful interactions that help reconstruct what
/// the user was doing when an issue occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Viewer opened for a new media item.
    OpenViewer,
    /// Toggle play/pause state.
    TogglePlayback,
    /// Seek by tapping the track.
    Seek {
        /// Target position in seconds.
        position_secs: f64,
    },
    /// Tap on the media surface toggling the control layer.
    ToggleControls,
    /// Toggle 90° rotation of a landscape source.
    ToggleRotation,
    /// Toggle the like state.
    ToggleLike,
    /// Expand or collapse the description.
    ToggleDescription,
    /// Close the viewer.
    CloseViewer,
}

/// Events reported by the media surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Metadata arrived.
    Loaded {
        duration_secs: f64,
        width: f32,
        height: f32,
    },
    /// Buffering state changed.
    Buffering(bool),
    /// Playback reached the end of the media.
    Ended,
    /// The surface reported an error.
    Error(SurfaceError),
}

/// What happened, without the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A user gesture.
    UserAction(UserAction),
    /// A media-surface callback.
    Surface(SurfaceEvent),
    /// A command issued to the surface was rejected.
    CommandFailed {
        command: SurfaceCommand,
        message: String,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub at: DateTime<Utc>,
    /// The event payload.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_carries_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction(UserAction::OpenViewer));
        assert_eq!(
            event.kind,
            DiagnosticEventKind::UserAction(UserAction::OpenViewer)
        );
    }
}
