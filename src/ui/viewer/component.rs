// SPDX-License-Identifier: MPL-2.0
//! The viewer component: single authority for playback, overlay
//! visibility, geometry and interaction state.
//!
//! All mutation happens through [`Viewer::handle`] on the host's single
//! event-processing thread; every transition returns the ordered side
//! effects the host must carry out, and [`Viewer::snapshot`] produces a
//! complete render state afterwards.

use crate::application::port::SurfaceCommand;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, SurfaceEvent, UserAction};
use crate::domain::media::{extensions, MediaRef};
use crate::error::SurfaceError;
use crate::ui::viewer::messages::{Effect, Message};
use crate::ui::viewer::snapshot::{
    GeometryState, InteractionState, OverlayVisibility, RenderSnapshot,
};
use crate::ui::viewer::state::Viewport;
use crate::ui::viewer::subcomponents::{interaction, playback, rotation, visibility};
use iced_core::Rectangle;

/// The media viewer overlay controller.
///
/// Created fresh per `MediaRef`; closing or switching media discards all
/// state. No timers run while paused at open.
#[derive(Debug, Clone)]
pub struct Viewer {
    media: MediaRef,
    config: Config,
    diagnostics: DiagnosticsHandle,

    playback: playback::State,
    visibility: visibility::State,
    rotation: rotation::State,
    interaction: interaction::State,

    offer_external_open: bool,
    closed: bool,
}

impl Viewer {
    /// Opens a viewer session for the given media.
    #[must_use]
    pub fn open(media: MediaRef, config: Config, diagnostics: DiagnosticsHandle) -> Self {
        diagnostics.log_action(UserAction::OpenViewer);
        Self {
            playback: playback::State::default(),
            visibility: visibility::State::new(&config),
            rotation: rotation::State::default(),
            interaction: interaction::State::new(&media, &config),
            offer_external_open: false,
            closed: false,
            media,
            config,
            diagnostics,
        }
    }

    /// Replaces the media, discarding all state for a fresh session.
    pub fn reopen(&mut self, media: MediaRef) {
        *self = Self::open(media, self.config.clone(), self.diagnostics.clone());
    }

    /// Handle one event: a gesture, a surface callback, or a tick.
    ///
    /// Returns the ordered side effects of the transition. Everything is
    /// ignored once the viewer has closed.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }

        match msg {
            // ═══════════════════════════════════════════════════════════════
            // GESTURES
            // ═══════════════════════════════════════════════════════════════
            Message::TogglePlayback => {
                if !self.media.kind.is_playable() {
                    return Vec::new();
                }
                if self.offer_external_open {
                    // Internal playback is off the table for this source;
                    // pressing play repeats the external-open offer.
                    return vec![Effect::OfferExternalOpen {
                        uri: self.media.source_uri.clone(),
                    }];
                }
                self.diagnostics.log_action(UserAction::TogglePlayback);
                let effects = self.playback.handle(playback::Message::TogglePlayback);
                self.route_playback_effects(effects)
            }
            Message::ToggleControls => {
                self.diagnostics.log_action(UserAction::ToggleControls);
                self.visibility.handle(visibility::Message::Toggle);
                Vec::new()
            }
            Message::SeekTrack { tap_x, track_width } => {
                if !self.media.kind.is_playable() {
                    return Vec::new();
                }
                let effects = self
                    .playback
                    .handle(playback::Message::SeekTrack { tap_x, track_width });
                if !effects.is_empty() {
                    self.diagnostics.log_action(UserAction::Seek {
                        position_secs: self.playback.playback().position_secs,
                    });
                }
                self.route_playback_effects(effects)
            }
            Message::ToggleRotation => {
                self.diagnostics.log_action(UserAction::ToggleRotation);
                self.rotation.handle(rotation::Message::Toggle);
                Vec::new()
            }
            Message::ToggleLike => {
                self.diagnostics.log_action(UserAction::ToggleLike);
                self.interaction.handle(interaction::Message::ToggleLike);
                Vec::new()
            }
            Message::ToggleDescription => {
                self.diagnostics.log_action(UserAction::ToggleDescription);
                self.interaction
                    .handle(interaction::Message::ToggleDescription);
                Vec::new()
            }
            Message::Close => {
                self.diagnostics.log_action(UserAction::CloseViewer);
                self.closed = true;
                let mut effects = Vec::new();
                if self.media.kind.is_playable() && self.playback.is_playing() {
                    effects.push(Effect::Command(SurfaceCommand::Pause));
                }
                effects.push(Effect::Closed);
                effects
            }

            // ═══════════════════════════════════════════════════════════════
            // SURFACE CALLBACKS
            // ═══════════════════════════════════════════════════════════════
            Message::SurfaceLoaded {
                duration_secs,
                width,
                height,
            } => {
                self.diagnostics.log_surface_event(SurfaceEvent::Loaded {
                    duration_secs,
                    width,
                    height,
                });
                self.playback
                    .handle(playback::Message::Loaded { duration_secs });
                self.rotation
                    .handle(rotation::Message::SourceDimensions { width, height });
                Vec::new()
            }
            Message::SurfaceProgress { position_secs } => {
                self.playback
                    .handle(playback::Message::Progress { position_secs });
                Vec::new()
            }
            Message::SurfaceBuffering(is_buffering) => {
                self.diagnostics
                    .log_surface_event(SurfaceEvent::Buffering(is_buffering));
                self.playback
                    .handle(playback::Message::Buffering(is_buffering));
                Vec::new()
            }
            Message::SurfaceEnded => {
                self.diagnostics.log_surface_event(SurfaceEvent::Ended);
                let effects = self.playback.handle(playback::Message::Ended);
                self.route_playback_effects(effects)
            }
            Message::SurfaceError(raw) => {
                let err = SurfaceError::from_message(&raw);
                self.diagnostics
                    .log_surface_event(SurfaceEvent::Error(err.clone()));

                let wants_external = err.wants_external_open()
                    || extensions::requires_external_open(&self.media.source_uri);
                let effects = self.playback.handle(playback::Message::Errored(err));
                let mut out = self.route_playback_effects(effects);

                if wants_external && !self.offer_external_open {
                    self.offer_external_open = true;
                    out.push(Effect::OfferExternalOpen {
                        uri: self.media.source_uri.clone(),
                    });
                }
                out
            }

            // ═══════════════════════════════════════════════════════════════
            // SCHEDULER
            // ═══════════════════════════════════════════════════════════════
            Message::Tick(elapsed) => {
                self.visibility.handle(visibility::Message::Tick(elapsed));
                Vec::new()
            }
        }
    }

    fn route_playback_effects(&mut self, effects: Vec<playback::Effect>) -> Vec<Effect> {
        let mut out = Vec::new();
        for effect in effects {
            match effect {
                playback::Effect::Command(cmd) => out.push(Effect::Command(cmd)),
                playback::Effect::HideControls => {
                    self.visibility.handle(visibility::Message::Hide);
                }
                playback::Effect::ShowControls => {
                    self.visibility.handle(visibility::Message::Show);
                }
            }
        }
        out
    }

    /// Full render state after the most recent transition.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        let playback = self.playback.playback();
        RenderSnapshot {
            media: self.media.clone(),
            playback: playback.clone(),
            overlay: OverlayVisibility {
                visible: self.visibility.is_visible(),
                mounted: self.visibility.is_mounted(),
                animation_progress: self.visibility.animation_progress().value(),
            },
            geometry: GeometryState {
                rotated: self.rotation.is_rotated(),
                is_landscape_source: self.rotation.is_landscape_source(),
            },
            interaction: InteractionState {
                liked: self.interaction.is_liked(),
                displayed_like_count: self.interaction.displayed_like_count(),
                description_expanded: self.interaction.is_description_expanded(),
            },
            description: self.interaction.description_view(),
            comment_count: self.media.comment_count,
            offer_external_open: self.offer_external_open,
            inline_error: playback.last_error.as_ref().map(ToString::to_string),
        }
    }

    /// The render rectangle for the given portrait viewport.
    #[must_use]
    pub fn render_rect(&self, viewport: Viewport) -> Rectangle {
        self.rotation.render_rect(viewport)
    }

    /// Whether the control layer should receive hits right now.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.closed && self.visibility.is_interactive()
    }

    /// Whether a fade animation is in flight (the host keeps ticking
    /// while this is true).
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        !self.closed && self.visibility.is_animating()
    }

    /// Whether the viewer has closed and discarded its state.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The media this session displays.
    #[must_use]
    pub fn media(&self) -> &MediaRef {
        &self.media
    }
}
