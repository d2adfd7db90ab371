// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for UI values, ensuring they are always within
//! valid ranges.

// =============================================================================
// AnimationProgress
// =============================================================================

/// Animation progress, guaranteed to be within `[0, 1]`.
///
/// `0.0` is fully hidden, `1.0` fully shown. Eliminates manual clamping
/// at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnimationProgress(f32);

impl AnimationProgress {
    /// Fully hidden.
    pub const ZERO: Self = Self(0.0);
    /// Fully shown.
    pub const ONE: Self = Self(1.0);

    /// Creates a new progress value, clamping into `[0, 1]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether progress has reached the hidden endpoint.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Returns whether progress has reached the shown endpoint.
    #[must_use]
    pub fn is_one(self) -> bool {
        self.0 >= 1.0
    }

    /// Moves toward `target` by `step`, never overshooting.
    #[must_use]
    pub fn step_toward(self, target: Self, step: f32) -> Self {
        let step = step.max(0.0);
        if self.0 < target.0 {
            Self::new((self.0 + step).min(target.0))
        } else {
            Self::new((self.0 - step).max(target.0))
        }
    }
}

impl Default for AnimationProgress {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(AnimationProgress::new(-0.5), AnimationProgress::ZERO);
        assert_eq!(AnimationProgress::new(1.5), AnimationProgress::ONE);
        assert_eq!(AnimationProgress::new(0.25).value(), 0.25);
    }

    #[test]
    fn step_toward_never_overshoots() {
        let p = AnimationProgress::new(0.9).step_toward(AnimationProgress::ONE, 0.5);
        assert!(p.is_one());

        let p = AnimationProgress::new(0.1).step_toward(AnimationProgress::ZERO, 0.5);
        assert!(p.is_zero());
    }

    #[test]
    fn step_toward_moves_in_both_directions() {
        let up = AnimationProgress::ZERO.step_toward(AnimationProgress::ONE, 0.25);
        assert_eq!(up.value(), 0.25);

        let down = AnimationProgress::ONE.step_toward(AnimationProgress::ZERO, 0.25);
        assert_eq!(down.value(), 0.75);
    }
}
