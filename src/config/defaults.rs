// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Overlay show/hide animation durations
//! - **Description**: Collapse threshold and hard length cap
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of the overlay show animation in milliseconds.
///
/// Show is deliberately faster than hide for a snappier reveal.
pub const DEFAULT_SHOW_ANIMATION_MS: u64 = 200;

/// Default duration of the overlay hide animation in milliseconds.
pub const DEFAULT_HIDE_ANIMATION_MS: u64 = 260;

/// Minimum allowed animation duration in milliseconds.
pub const MIN_ANIMATION_MS: u64 = 50;

/// Maximum allowed animation duration in milliseconds.
pub const MAX_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Description Defaults
// ==========================================================================

/// Default character count shown for a collapsed description.
///
/// Descriptions at or below this length are always shown in full with
/// no expand affordance.
pub const DEFAULT_DESCRIPTION_COLLAPSE_CHARS: usize = 15;

/// Minimum allowed collapse threshold.
pub const MIN_DESCRIPTION_COLLAPSE_CHARS: usize = 1;

/// Maximum allowed collapse threshold.
pub const MAX_DESCRIPTION_COLLAPSE_CHARS: usize = 10_000;

/// Hard cap on description length, applied before any other processing.
/// Bounds render cost for pathological inputs.
pub const MAX_DESCRIPTION_CHARS: usize = 20_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 1_000;

/// Minimum diagnostics buffer capacity.
pub const MIN_EVENT_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_EVENT_BUFFER_CAPACITY: usize = 100_000;
