// SPDX-License-Identifier: MPL-2.0
//! Core media descriptor types.
//!
//! These types represent pure data without any presentation dependencies.

/// The kind of media a viewer session displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, WebP, etc.)
    Image,
    /// Video with a timeline.
    Video,
    /// Audio with a timeline.
    Audio,
    /// Document handed to an embedded or external renderer.
    Document,
}

impl MediaKind {
    /// Returns true for kinds with a playback timeline (video and audio).
    #[must_use]
    pub fn is_playable(self) -> bool {
        matches!(self, Self::Video | Self::Audio)
    }
}

/// The item being viewed, supplied by the caller when the viewer opens.
///
/// Immutable for the lifetime of one viewing session; a new `MediaRef`
/// means a fresh session with all controller state reset.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub source_uri: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub subcategory: Option<String>,
    pub format: Option<String>,
    pub like_count: Option<i64>,
    pub comment_count: Option<i64>,
}

impl MediaRef {
    /// Creates a descriptor with only the required fields set.
    #[must_use]
    pub fn new(kind: MediaKind, source_uri: impl Into<String>) -> Self {
        Self {
            kind,
            source_uri: source_uri.into(),
            title: None,
            author: None,
            description: None,
            subcategory: None,
            format: None,
            like_count: None,
            comment_count: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the starting like count.
    #[must_use]
    pub fn with_like_count(mut self, count: i64) -> Self {
        self.like_count = Some(count);
        self
    }

    /// Sets the comment count.
    #[must_use]
    pub fn with_comment_count(mut self, count: i64) -> Self {
        self.comment_count = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playable_kinds() {
        assert!(MediaKind::Video.is_playable());
        assert!(MediaKind::Audio.is_playable());
        assert!(!MediaKind::Image.is_playable());
        assert!(!MediaKind::Document.is_playable());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let media = MediaRef::new(MediaKind::Video, "clips/intro.mp4")
            .with_title("Intro")
            .with_like_count(12);

        assert_eq!(media.title.as_deref(), Some("Intro"));
        assert_eq!(media.like_count, Some(12));
        assert_eq!(media.comment_count, None);
    }
}
