// SPDX-License-Identifier: MPL-2.0
//! User-toggled 90° rotation for landscape sources in a portrait viewport.

use crate::ui::viewer::state::{is_landscape, Viewport};
use iced_core::Rectangle;

/// Rotation/geometry state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    /// Whether the user rotated the content 90°.
    rotated: bool,
    /// Whether the source's natural width exceeds its height.
    is_landscape_source: bool,
}

/// Messages for the rotation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip the 90° rotation.
    Toggle,
    /// Surface reported the source's natural dimensions.
    SourceDimensions { width: f32, height: f32 },
}

/// Effects produced by rotation changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Rotation changed - view needs update.
    RotationChanged,
}

impl State {
    /// Handle a rotation message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                // Rotation is only offered for landscape sources.
                if !self.is_landscape_source {
                    return Effect::None;
                }
                self.rotated = !self.rotated;
                Effect::RotationChanged
            }
            Message::SourceDimensions { width, height } => {
                self.is_landscape_source = is_landscape(width, height);
                if !self.is_landscape_source && self.rotated {
                    self.rotated = false;
                    return Effect::RotationChanged;
                }
                Effect::None
            }
        }
    }

    /// Whether the content is currently rotated.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Whether the source is landscape (rotation offered at all).
    #[must_use]
    pub fn is_landscape_source(&self) -> bool {
        self.is_landscape_source
    }

    /// Quarter turns to apply when drawing the media surface.
    #[must_use]
    pub fn quarter_turns(&self) -> u8 {
        u8::from(self.rotated)
    }

    /// The render rectangle for the given portrait viewport.
    #[must_use]
    pub fn render_rect(&self, viewport: Viewport) -> Rectangle {
        if self.rotated {
            viewport.rotated_rect()
        } else {
            viewport.upright_rect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_noop_for_portrait_sources() {
        let mut state = State::default();
        state.handle(Message::SourceDimensions {
            width: 1080.0,
            height: 1920.0,
        });

        let before = state;
        let effect = state.handle(Message::Toggle);
        assert!(matches!(effect, Effect::None));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_flips_for_landscape_sources() {
        let mut state = State::default();
        state.handle(Message::SourceDimensions {
            width: 1920.0,
            height: 1080.0,
        });

        let effect = state.handle(Message::Toggle);
        assert!(matches!(effect, Effect::RotationChanged));
        assert!(state.is_rotated());
        assert_eq!(state.quarter_turns(), 1);

        state.handle(Message::Toggle);
        assert!(!state.is_rotated());
    }

    #[test]
    fn portrait_dimensions_clear_a_previous_rotation() {
        let mut state = State::default();
        state.handle(Message::SourceDimensions {
            width: 1920.0,
            height: 1080.0,
        });
        state.handle(Message::Toggle);
        assert!(state.is_rotated());

        let effect = state.handle(Message::SourceDimensions {
            width: 720.0,
            height: 1280.0,
        });
        assert!(matches!(effect, Effect::RotationChanged));
        assert!(!state.is_rotated());
    }

    #[test]
    fn render_rect_swaps_when_rotated() {
        let mut state = State::default();
        state.handle(Message::SourceDimensions {
            width: 1920.0,
            height: 1080.0,
        });
        let viewport = Viewport::new(390.0, 844.0);

        let upright = state.render_rect(viewport);
        assert_eq!(upright.width, 390.0);

        state.handle(Message::Toggle);
        let rotated = state.render_rect(viewport);
        assert_eq!(rotated.width, 844.0);
        assert_eq!(rotated.height, 390.0);
    }
}
