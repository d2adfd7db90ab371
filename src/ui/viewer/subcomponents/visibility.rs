// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility sub-component with animated mount/unmount.
//!
//! `visible` is the logical target driving the animation direction;
//! `mounted` keeps the control layer alive while a hide animation is in
//! flight and drops only when a hide completes with the target still
//! hidden. A show requested mid-hide cancels the pending unmount.

use crate::config::Config;
use crate::domain::ui::AnimationProgress;
use crate::ui::viewer::animation::{AnimationState, Target};
use std::time::Duration;

/// Overlay visibility state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    visible: bool,
    mounted: bool,
    animation: AnimationState,
    show_duration: Duration,
    hide_duration: Duration,
}

/// Messages for the visibility sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// User tap on the media surface: flip visibility.
    Toggle,
    /// Force the controls visible (pause path).
    Show,
    /// Force the controls hidden (play path).
    Hide,
    /// Advance the fade animation.
    Tick(Duration),
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Logical visibility flipped.
    VisibilityChanged(bool),
    /// The hide animation completed and the layer unmounted.
    Unmounted,
}

impl State {
    /// Creates the state for a fresh viewing session: controls visible
    /// and mounted, no animation in flight.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            visible: true,
            mounted: true,
            animation: AnimationState::shown(),
            show_duration: config.show_duration(),
            hide_duration: config.hide_duration(),
        }
    }

    /// Handle a visibility message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                if self.visible {
                    self.start_hide()
                } else {
                    self.start_show()
                }
            }
            Message::Show => self.start_show(),
            Message::Hide => self.start_hide(),
            Message::Tick(elapsed) => {
                let duration = match self.animation.target() {
                    Target::Shown => self.show_duration,
                    Target::Hidden => self.hide_duration,
                };
                self.animation.tick(elapsed, duration);
                if self.mounted && !self.visible && self.animation.progress().is_zero() {
                    self.mounted = false;
                    return Effect::Unmounted;
                }
                Effect::None
            }
        }
    }

    fn start_show(&mut self) -> Effect {
        let changed = !self.visible;
        self.visible = true;
        // Cancels a pending unmount from an in-flight hide.
        self.mounted = true;
        self.animation.set_target(Target::Shown);
        if changed {
            Effect::VisibilityChanged(true)
        } else {
            Effect::None
        }
    }

    fn start_hide(&mut self) -> Effect {
        let changed = self.visible;
        self.visible = false;
        self.animation.set_target(Target::Hidden);
        if changed {
            Effect::VisibilityChanged(false)
        } else {
            Effect::None
        }
    }

    /// Logical visibility target.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the control layer still exists for interaction/animation.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current fade progress.
    #[must_use]
    pub fn animation_progress(&self) -> AnimationProgress {
        self.animation.progress()
    }

    /// Whether a gesture should hit-test against the controls right now:
    /// mounted and still logically visible.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.mounted && self.visible
    }

    /// True while a fade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animation.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(&Config::default())
    }

    fn run_to_settled(state: &mut State) {
        for _ in 0..100 {
            if !state.is_animating() {
                break;
            }
            state.handle(Message::Tick(Duration::from_millis(20)));
        }
    }

    #[test]
    fn fresh_state_is_visible_and_mounted() {
        let state = state();
        assert!(state.is_visible());
        assert!(state.is_mounted());
        assert!(state.animation_progress().is_one());
        assert!(state.is_interactive());
    }

    #[test]
    fn hide_keeps_layer_mounted_until_animation_completes() {
        let mut state = state();
        let effect = state.handle(Message::Hide);
        assert!(matches!(effect, Effect::VisibilityChanged(false)));
        assert!(!state.is_visible());
        assert!(state.is_mounted());
        assert!(!state.is_interactive());

        // Partway through the fade the layer is still mounted.
        state.handle(Message::Tick(Duration::from_millis(100)));
        assert!(state.is_mounted());

        run_to_settled(&mut state);
        assert!(!state.is_mounted());
        assert!(state.animation_progress().is_zero());
    }

    #[test]
    fn unmount_effect_fires_on_completion_tick() {
        let mut state = state();
        state.handle(Message::Hide);

        let effect = state.handle(Message::Tick(Duration::from_millis(500)));
        assert!(matches!(effect, Effect::Unmounted));
        assert!(!state.is_mounted());
    }

    #[test]
    fn show_mid_hide_cancels_pending_unmount() {
        let mut state = state();
        state.handle(Message::Hide);
        state.handle(Message::Tick(Duration::from_millis(100)));
        assert!(state.is_mounted());

        state.handle(Message::Show);
        run_to_settled(&mut state);

        assert!(state.is_visible());
        assert!(state.is_mounted());
        assert!(state.animation_progress().is_one());
    }

    #[test]
    fn toggle_flips_logical_visibility() {
        let mut state = state();
        assert!(matches!(
            state.handle(Message::Toggle),
            Effect::VisibilityChanged(false)
        ));
        assert!(matches!(
            state.handle(Message::Toggle),
            Effect::VisibilityChanged(true)
        ));
    }

    #[test]
    fn redundant_show_produces_no_effect() {
        let mut state = state();
        assert!(matches!(state.handle(Message::Show), Effect::None));
    }

    #[test]
    fn show_is_faster_than_hide() {
        let config = Config::default();
        assert!(config.show_duration() < config.hide_duration());
    }
}
