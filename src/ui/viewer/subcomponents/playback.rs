// SPDX-License-Identifier: MPL-2.0
//! Playback sub-component for timeline media (video and audio).
//!
//! Owns the [`PlaybackState`] record and turns gestures and surface
//! callbacks into surface commands plus visibility intents. The
//! orchestrator routes the intents to the visibility sub-component.

use crate::application::port::SurfaceCommand;
use crate::domain::playback::PlaybackState;
use crate::error::SurfaceError;

/// Playback sub-component state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// The authoritative playback record.
    playback: PlaybackState,
    /// Set when an optimistic seek was issued; the next progress report
    /// is discarded so the stale pre-seek position cannot win.
    seek_in_flight: bool,
}

/// Messages for the playback sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle play/pause.
    TogglePlayback,
    /// Tap on the scrub track at pixel offset `tap_x` of `track_width`.
    SeekTrack { tap_x: f32, track_width: f32 },
    /// Surface reported its duration.
    Loaded { duration_secs: f64 },
    /// Surface reported the current position (advisory telemetry).
    Progress { position_secs: f64 },
    /// Surface buffering state changed.
    Buffering(bool),
    /// Surface reached the end of the media.
    Ended,
    /// Surface reported an error.
    Errored(SurfaceError),
}

/// Effects produced by playback transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a command to the media surface.
    Command(SurfaceCommand),
    /// Controls must hide immediately (playback started).
    HideControls,
    /// Controls must show immediately (playback paused, ended or errored).
    ShowControls,
}

impl State {
    /// Handle a playback message.
    ///
    /// Returns the ordered side effects of the transition.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        match msg {
            Message::TogglePlayback => self.toggle_playback(),
            Message::SeekTrack { tap_x, track_width } => self.seek_track(tap_x, track_width),
            Message::Loaded { duration_secs } => {
                self.playback.duration_secs = duration_secs.max(0.0);
                // Re-apply the position invariant now that the bound is known.
                let position = self.playback.position_secs;
                self.playback.set_position(position);
                Vec::new()
            }
            Message::Progress { position_secs } => {
                if self.seek_in_flight {
                    // Last write wins: the first report after an optimistic
                    // seek still carries the pre-seek position.
                    self.seek_in_flight = false;
                } else {
                    self.playback.set_position(position_secs);
                }
                Vec::new()
            }
            Message::Buffering(is_buffering) => {
                self.playback.is_buffering = is_buffering;
                Vec::new()
            }
            Message::Ended => {
                self.playback.is_playing = false;
                self.playback.set_position(0.0);
                self.seek_in_flight = false;
                vec![
                    Effect::Command(SurfaceCommand::Seek(0.0)),
                    Effect::ShowControls,
                ]
            }
            Message::Errored(err) => {
                self.playback.is_playing = false;
                self.playback.last_error = Some(err);
                // The retry affordance is the play control, so the
                // overlay must come back even if it had faded out.
                vec![Effect::ShowControls]
            }
        }
    }

    fn toggle_playback(&mut self) -> Vec<Effect> {
        if self.playback.is_playing {
            self.playback.is_playing = false;
            return vec![
                Effect::Command(SurfaceCommand::Pause),
                Effect::ShowControls,
            ];
        }

        if self.playback.last_error == Some(SurfaceError::UnsupportedFormat) {
            // Unsupported media never re-enters internal playback; the
            // external-open offer stands instead.
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.playback.at_end() {
            // Replay: rewind before resuming.
            self.playback.set_position(0.0);
            self.seek_in_flight = true;
            effects.push(Effect::Command(SurfaceCommand::Seek(0.0)));
        }

        // Pressing play is the retry path after a generic surface error.
        self.playback.last_error = None;
        self.playback.is_playing = true;
        effects.push(Effect::Command(SurfaceCommand::Play));
        effects.push(Effect::HideControls);
        effects
    }

    fn seek_track(&mut self, tap_x: f32, track_width: f32) -> Vec<Effect> {
        // Undefined while the duration is unknown, and a zero-width track
        // is a layout race; both drop the request.
        if !self.playback.has_duration() || track_width <= 0.0 {
            return Vec::new();
        }

        let ratio = f64::from((tap_x / track_width).clamp(0.0, 1.0));
        let target_secs = ratio * self.playback.duration_secs;

        // Optimistic: position updates before the surface confirms.
        self.playback.set_position(target_secs);
        self.seek_in_flight = true;
        vec![Effect::Command(SurfaceCommand::Seek(target_secs))]
    }

    /// The playback record.
    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Whether playback is active.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing
    }
}
