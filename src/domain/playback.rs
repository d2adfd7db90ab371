// SPDX-License-Identifier: MPL-2.0
//! Playback state record for timeline media.
//!
//! Applicable only to video and audio; image and document sessions keep
//! the default record and never transition it.

use crate::error::SurfaceError;

/// Current playback state of a timeline media session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    /// Whether playback is active.
    pub is_playing: bool,
    /// Current position in seconds. Monotonically non-decreasing while
    /// playing except on explicit seek or end-of-media reset to 0.
    pub position_secs: f64,
    /// Total duration in seconds; 0 until the surface reports it.
    pub duration_secs: f64,
    /// Whether the surface is currently buffering.
    pub is_buffering: bool,
    /// Last error reported by the surface, if any.
    pub last_error: Option<SurfaceError>,
}

impl PlaybackState {
    /// Returns true once the surface has reported a usable duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration_secs > 0.0
    }

    /// Returns true when the position sits at or past the known end.
    ///
    /// Always false while the duration is unknown.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.has_duration() && self.position_secs >= self.duration_secs
    }

    /// Sets the position, clamping into `[0, duration]` once the duration
    /// is known. With an unknown duration only the lower bound applies.
    pub fn set_position(&mut self, secs: f64) {
        let lower = secs.max(0.0);
        self.position_secs = if self.has_duration() {
            lower.min(self.duration_secs)
        } else {
            lower
        };
    }

    /// Fraction of the timeline elapsed, in `[0, 1]`; `None` while the
    /// duration is unknown.
    #[must_use]
    pub fn progress_fraction(&self) -> Option<f64> {
        if !self.has_duration() {
            return None;
        }
        Some((self.position_secs / self.duration_secs).clamp(0.0, 1.0))
    }
}
