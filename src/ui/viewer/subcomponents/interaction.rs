// SPDX-License-Identifier: MPL-2.0
//! Like and description affordances layered over the media surface.
//!
//! The like counter is purely optimistic local state: the displayed
//! value is derived from the immutable starting count plus the toggle,
//! so like-then-unlike restores the original count exactly, including
//! the unknown-count case.

use crate::config::defaults::MAX_DESCRIPTION_CHARS;
use crate::config::Config;
use crate::domain::media::MediaRef;

/// Ellipsis appended to a collapsed description.
const ELLIPSIS: char = '\u{2026}';

/// Interaction sub-component state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    liked: bool,
    base_like_count: Option<i64>,
    description_expanded: bool,
    /// Description text, hard-capped before any further processing.
    description: Option<String>,
    collapse_chars: usize,
}

/// Messages for the interaction sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip the like state.
    ToggleLike,
    /// Flip description expansion.
    ToggleDescription,
}

/// Effects produced by interaction changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Like state flipped.
    LikeChanged(bool),
    /// Description expansion flipped.
    DescriptionChanged(bool),
}

/// What the presentation layer should draw for the description.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionView {
    /// Text to display (collapsed texts end with an ellipsis).
    pub text: String,
    /// Whether an expand/collapse affordance is offered.
    pub can_expand: bool,
    /// Whether the full text is currently shown.
    pub expanded: bool,
}

impl State {
    /// Creates the state for a fresh viewing session.
    #[must_use]
    pub fn new(media: &MediaRef, config: &Config) -> Self {
        let description = media
            .description
            .as_deref()
            .map(|text| hard_cap(text, MAX_DESCRIPTION_CHARS));

        Self {
            liked: false,
            base_like_count: media.like_count,
            description_expanded: false,
            description,
            collapse_chars: config.collapse_chars(),
        }
    }

    /// Handle an interaction message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ToggleLike => {
                self.liked = !self.liked;
                Effect::LikeChanged(self.liked)
            }
            Message::ToggleDescription => {
                // No affordance, nothing to toggle.
                if !self.can_expand() {
                    return Effect::None;
                }
                self.description_expanded = !self.description_expanded;
                Effect::DescriptionChanged(self.description_expanded)
            }
        }
    }

    /// Whether the user has liked the item this session.
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// The like count to display, derived from the starting count and
    /// the toggle. `None` when the count is unknown and not liked.
    #[must_use]
    pub fn displayed_like_count(&self) -> Option<i64> {
        match self.base_like_count {
            Some(count) => Some(count + i64::from(self.liked)),
            None => self.liked.then_some(1),
        }
    }

    /// Whether the description is currently expanded.
    #[must_use]
    pub fn is_description_expanded(&self) -> bool {
        self.description_expanded
    }

    /// Whether the description overflows the collapse threshold.
    #[must_use]
    pub fn can_expand(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|text| text.chars().count() > self.collapse_chars)
    }

    /// The description to draw, or `None` when the media has none.
    #[must_use]
    pub fn description_view(&self) -> Option<DescriptionView> {
        let text = self.description.as_deref()?;
        let can_expand = self.can_expand();

        let shown = if can_expand && !self.description_expanded {
            let mut collapsed: String = text.chars().take(self.collapse_chars).collect();
            collapsed.push(ELLIPSIS);
            collapsed
        } else {
            text.to_string()
        };

        Some(DescriptionView {
            text: shown,
            can_expand,
            expanded: self.description_expanded,
        })
    }
}

/// Truncates to at most `max_chars` characters, on a char boundary.
fn hard_cap(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
