// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting viewer activity breadcrumbs.
//!
//! Events are stored in a memory-bounded circular buffer behind a
//! cheap-to-clone [`DiagnosticsHandle`]. Recording never fails and never
//! blocks meaningfully; the controller stays single-threaded (the mutex
//! exists so a host can drain the buffer from another thread).

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, SurfaceEvent, UserAction};

use std::sync::{Arc, Mutex};

use crate::application::port::SurfaceCommand;
use crate::error::SurfaceError;

/// Handle for recording diagnostic events.
///
/// Cheap to clone; all clones share one bounded buffer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    /// Creates a handle with a specific buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a user action breadcrumb.
    pub fn log_action(&self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction(action));
    }

    /// Records a media-surface callback.
    pub fn log_surface_event(&self, event: SurfaceEvent) {
        self.push(DiagnosticEventKind::Surface(event));
    }

    /// Records a rejected surface command.
    pub fn log_command_failure(&self, command: SurfaceCommand, err: &SurfaceError) {
        self.push(DiagnosticEventKind::CommandFailed {
            command,
            message: err.to_string(),
        });
    }

    /// Returns a copy of all buffered events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Drops all buffered events.
    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn push(&self, kind: DiagnosticEventKind) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::new(kind));
        }
    }
}
