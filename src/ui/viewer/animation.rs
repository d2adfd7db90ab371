// SPDX-License-Identifier: MPL-2.0
//! Time-based visibility animation driven by explicit tick messages.
//!
//! The controller owns no timers; the host forwards scheduler ticks and
//! the animation advances its progress linearly toward the target. This
//! keeps transitions deterministic and testable without a runtime.

use crate::domain::ui::AnimationProgress;
use std::time::Duration;

/// The endpoint an animation is moving toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Fully visible (`progress == 1`).
    Shown,
    /// Fully hidden (`progress == 0`).
    Hidden,
}

impl Target {
    fn endpoint(self) -> AnimationProgress {
        match self {
            Target::Shown => AnimationProgress::ONE,
            Target::Hidden => AnimationProgress::ZERO,
        }
    }
}

/// Progress of the overlay fade, moving monotonically toward its target.
///
/// Retargeting mid-flight keeps the current progress, so a show requested
/// during a hide reverses smoothly instead of snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    target: Target,
    progress: AnimationProgress,
}

impl AnimationState {
    /// Starts settled at fully shown.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            target: Target::Shown,
            progress: AnimationProgress::ONE,
        }
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> AnimationProgress {
        self.progress
    }

    /// True once progress has reached the target endpoint.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.progress == self.target.endpoint()
    }

    /// Redirects the animation. Supersedes any in-flight transition; at
    /// most one animation direction is ever active.
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// Advances by `elapsed` against the full-transition `duration`.
    ///
    /// Returns `true` exactly when this tick reached the endpoint.
    pub fn tick(&mut self, elapsed: Duration, duration: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let step = if duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / duration.as_secs_f32()
        };

        self.progress = self.progress.step_toward(self.target.endpoint(), step);
        self.is_settled()
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDE: Duration = Duration::from_millis(260);

    #[test]
    fn starts_settled_and_shown() {
        let anim = AnimationState::shown();
        assert!(anim.is_settled());
        assert!(anim.progress().is_one());
    }

    #[test]
    fn ticks_advance_monotonically_toward_hidden() {
        let mut anim = AnimationState::shown();
        anim.set_target(Target::Hidden);

        let mut last = anim.progress().value();
        for _ in 0..4 {
            let completed = anim.tick(Duration::from_millis(65), HIDE);
            assert!(anim.progress().value() <= last);
            last = anim.progress().value();
            if completed {
                break;
            }
        }
        assert!(anim.is_settled());
        assert!(anim.progress().is_zero());
    }

    #[test]
    fn completion_is_reported_exactly_once() {
        let mut anim = AnimationState::shown();
        anim.set_target(Target::Hidden);

        assert!(anim.tick(HIDE, HIDE));
        assert!(!anim.tick(HIDE, HIDE));
    }

    #[test]
    fn retarget_mid_flight_keeps_progress() {
        let mut anim = AnimationState::shown();
        anim.set_target(Target::Hidden);
        anim.tick(Duration::from_millis(130), HIDE);
        let mid = anim.progress().value();
        assert!(mid > 0.0 && mid < 1.0);

        anim.set_target(Target::Shown);
        assert_eq!(anim.progress().value(), mid);
        assert!(!anim.is_settled());
    }

    #[test]
    fn zero_duration_settles_in_one_tick() {
        let mut anim = AnimationState::shown();
        anim.set_target(Target::Hidden);
        assert!(anim.tick(Duration::from_millis(1), Duration::ZERO));
    }
}
