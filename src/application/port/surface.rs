// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait for the opaque
//! playback/render primitive the overlay controller commands. Host
//! applications implement it over their platform player.
//!
//! # Design Notes
//!
//! - The surface is **stateful** - it owns decode and render internals
//! - Methods are not `async` - the controller runs on the host's single
//!   event-processing thread and commands must not block it
//! - The surface reports back through callbacks (`loaded`, `progress`,
//!   `buffering`, `ended`, `error`) that the host forwards to the
//!   controller as messages

use crate::diagnostics::DiagnosticsHandle;
use crate::error::SurfaceError;

/// A command the overlay controller issues to the media surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    /// Start or resume playback.
    Play,
    /// Pause playback at the current position.
    Pause,
    /// Jump to an absolute position in seconds.
    Seek(f64),
}

/// Port for the opaque media surface.
///
/// The controller never inspects the surface; it only issues commands
/// and consumes the callback events the host forwards back.
///
/// # Failure semantics
///
/// A failed command leaves controller state unchanged; the user retries
/// by tapping again. Use [`apply_command`] to get that behavior plus a
/// diagnostics breadcrumb for free.
pub trait MediaSurface {
    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the surface cannot start playback.
    fn play(&mut self) -> Result<(), SurfaceError>;

    /// Pauses playback at the current position.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the surface rejects the pause.
    fn pause(&mut self) -> Result<(), SurfaceError>;

    /// Seeks to an absolute position in seconds.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the seek fails.
    fn seek(&mut self, position_secs: f64) -> Result<(), SurfaceError>;
}

/// Dispatches a single command to a surface.
///
/// Failures are recorded in diagnostics and otherwise swallowed: command
/// issuance is fire-and-forget from the controller's point of view, and
/// a dropped command never corrupts controller state.
pub fn apply_command(
    surface: &mut dyn MediaSurface,
    command: SurfaceCommand,
    diagnostics: &DiagnosticsHandle,
) {
    let result = match command {
        SurfaceCommand::Play => surface.play(),
        SurfaceCommand::Pause => surface.pause(),
        SurfaceCommand::Seek(secs) => surface.seek(secs),
    };

    if let Err(err) = result {
        diagnostics.log_command_failure(command, &err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaSurface) {}

    // Mock implementation for testing
    struct MockSurface {
        playing: bool,
        position: f64,
        fail_seek: bool,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                playing: false,
                position: 0.0,
                fail_seek: false,
            }
        }
    }

    impl MediaSurface for MockSurface {
        fn play(&mut self) -> Result<(), SurfaceError> {
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) -> Result<(), SurfaceError> {
            self.playing = false;
            Ok(())
        }

        fn seek(&mut self, position_secs: f64) -> Result<(), SurfaceError> {
            if self.fail_seek {
                return Err(SurfaceError::CommandRejected("seek refused".to_string()));
            }
            self.position = position_secs;
            Ok(())
        }
    }

    #[test]
    fn apply_command_drives_the_surface() {
        let mut surface = MockSurface::new();
        let diagnostics = DiagnosticsHandle::default();

        apply_command(&mut surface, SurfaceCommand::Play, &diagnostics);
        assert!(surface.playing);

        apply_command(&mut surface, SurfaceCommand::Seek(12.5), &diagnostics);
        assert_eq!(surface.position, 12.5);

        apply_command(&mut surface, SurfaceCommand::Pause, &diagnostics);
        assert!(!surface.playing);
        assert!(diagnostics.snapshot().is_empty());
    }

    #[test]
    fn failed_command_is_logged_and_swallowed() {
        let mut surface = MockSurface::new();
        surface.fail_seek = true;
        let diagnostics = DiagnosticsHandle::default();

        apply_command(&mut surface, SurfaceCommand::Seek(3.0), &diagnostics);

        assert_eq!(surface.position, 0.0);
        let events = diagnostics.snapshot();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0].kind,
            DiagnosticEventKind::CommandFailed { .. }
        ));
    }
}
