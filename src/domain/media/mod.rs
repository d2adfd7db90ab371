// SPDX-License-Identifier: MPL-2.0
//! Media descriptor types for the domain layer.

mod types;

pub use types::{MediaKind, MediaRef};

/// Source suffix policy for the open-externally fallback.
pub mod extensions {
    /// Document suffixes that are never rendered in-app; the viewer offers
    /// to hand them to an external application instead.
    pub const EXTERNAL_ONLY_EXTENSIONS: &[&str] = &[
        "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "rtf",
    ];

    /// Video containers the in-app surface is known to choke on.
    pub const PROBLEM_VIDEO_EXTENSIONS: &[&str] = &["avi", "wmv", "flv", "mkv"];

    /// Extracts the lowercase suffix of a source URI, ignoring any query
    /// string or fragment.
    #[must_use]
    pub fn uri_suffix(uri: &str) -> Option<String> {
        let path = uri.split(['?', '#']).next().unwrap_or(uri);
        let name = path.rsplit('/').next().unwrap_or(path);
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }

    /// Checks whether a source URI should be opened externally rather than
    /// retried in-app after a surface error.
    #[must_use]
    pub fn requires_external_open(uri: &str) -> bool {
        uri_suffix(uri).is_some_and(|ext| {
            EXTERNAL_ONLY_EXTENSIONS.contains(&ext.as_str())
                || PROBLEM_VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::extensions::{requires_external_open, uri_suffix};

    #[test]
    fn uri_suffix_handles_query_strings() {
        assert_eq!(
            uri_suffix("https://cdn.example.com/deck.pptx?token=abc"),
            Some("pptx".to_string())
        );
    }

    #[test]
    fn uri_suffix_none_without_extension() {
        assert_eq!(uri_suffix("https://cdn.example.com/stream"), None);
        assert_eq!(uri_suffix(".hidden"), None);
    }

    #[test]
    fn documents_require_external_open() {
        assert!(requires_external_open("content/report.docx"));
        assert!(requires_external_open("content/old-video.AVI"));
        assert!(!requires_external_open("content/clip.mp4"));
        assert!(!requires_external_open("content/photo.jpg"));
    }
}
