// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Surface(SurfaceError),
}

/// Specific error types reported by the opaque media surface.
/// Used to decide between the inline-error and open-externally fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Source format is not playable in-app (known-problematic suffix).
    UnsupportedFormat,

    /// Decoding failed while the surface was rendering.
    DecodingFailed(String),

    /// The surface lost access to its source (network hiccup, missing file).
    SourceUnavailable(String),

    /// A play/pause/seek command was rejected by the surface.
    CommandRejected(String),

    /// Generic error with raw message.
    Other(String),
}

impl SurfaceError {
    /// Attempts to classify a raw surface error message.
    ///
    /// Surfaces report free-form strings; this maps the common ones onto
    /// the taxonomy so the controller can pick the right fallback.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("unsupported")
            || msg_lower.contains("no decoder")
            || msg_lower.contains("unknown format")
        {
            return SurfaceError::UnsupportedFormat;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("network")
            || msg_lower.contains("timed out")
        {
            return SurfaceError::SourceUnavailable(msg.to_string());
        }

        if msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("invalid data")
            || msg_lower.contains("malformed")
        {
            return SurfaceError::DecodingFailed(msg.to_string());
        }

        if msg_lower.contains("rejected") || msg_lower.contains("refused") {
            return SurfaceError::CommandRejected(msg.to_string());
        }

        SurfaceError::Other(msg.to_string())
    }

    /// True when the source should be handed to an external application
    /// instead of retrying in-app playback.
    #[must_use]
    pub fn wants_external_open(&self) -> bool {
        matches!(self, SurfaceError::UnsupportedFormat)
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::UnsupportedFormat => write!(f, "Unsupported media format"),
            SurfaceError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            SurfaceError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            SurfaceError::CommandRejected(msg) => write!(f, "Command rejected: {}", msg),
            SurfaceError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Surface(e) => write!(f, "Surface Error: {}", e),
        }
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn surface_error_from_message_unsupported() {
        let err = SurfaceError::from_message("Unsupported container");
        assert_eq!(err, SurfaceError::UnsupportedFormat);
        assert!(err.wants_external_open());
    }

    #[test]
    fn surface_error_from_message_source_unavailable() {
        let err = SurfaceError::from_message("Network request timed out");
        assert!(matches!(err, SurfaceError::SourceUnavailable(_)));
        assert!(!err.wants_external_open());
    }

    #[test]
    fn surface_error_from_message_decoding() {
        let err = SurfaceError::from_message("Invalid data found while decoding");
        assert!(matches!(err, SurfaceError::DecodingFailed(_)));
    }

    #[test]
    fn surface_error_from_message_other() {
        let err = SurfaceError::from_message("something odd happened");
        assert!(matches!(err, SurfaceError::Other(_)));
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::DecodingFailed("bad packet".to_string());
        assert!(format!("{}", err).contains("bad packet"));
    }
}
