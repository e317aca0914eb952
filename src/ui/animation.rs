// SPDX-License-Identifier: MPL-2.0
//! Animation curves and content transitions.
//!
//! Curves map elapsed time to a progress value in `[0, 1]` (springs may
//! briefly overshoot). They carry no clock of their own; callers feed the
//! elapsed time from their frame callbacks.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::time::Duration;

/// Default spring response in seconds.
pub const DEFAULT_SPRING_RESPONSE: f32 = 0.3;
/// Default spring damping fraction.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.7;
/// Duration of the platform default (non-spring) curve, in seconds.
pub const DEFAULT_CURVE_DURATION: f32 = 0.35;
/// Response of the `smooth` curve, a critically damped spring.
pub const SMOOTH_RESPONSE: f32 = 0.5;
/// Longest accepted curve duration or spring response, in seconds.
pub const MAX_CURVE_SECONDS: f32 = 60.0;

/// Fraction of the distance a spring may still be away from its target when
/// it is considered settled.
const SETTLE_TOLERANCE: f32 = 1.0e-3;
/// `(1 + x) * e^-x` falls below [`SETTLE_TOLERANCE`] at this `x`.
const CRITICAL_SETTLE_FACTOR: f32 = 9.23;

/// Timing curve of an animated change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnimationCurve {
    /// Damped spring. `response` is the undamped period in seconds.
    Spring { response: f32, damping_fraction: f32 },
    /// Critically damped spring without bounce.
    Smooth,
    EaseOut { duration: f32 },
    EaseInOut { duration: f32 },
    Linear { duration: f32 },
    /// Fixed, non-spring platform default.
    Default,
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::Spring {
            response: DEFAULT_SPRING_RESPONSE,
            damping_fraction: DEFAULT_SPRING_DAMPING,
        }
    }
}

impl AnimationCurve {
    /// Returns true for spring-based curves.
    #[must_use]
    pub fn is_spring(self) -> bool {
        matches!(self, AnimationCurve::Spring { .. } | AnimationCurve::Smooth)
    }

    /// Time after which the curve reports a progress of exactly 1.
    #[must_use]
    pub fn settle_duration(self) -> Duration {
        let secs = match self {
            AnimationCurve::Spring {
                response,
                damping_fraction,
            } => spring_settle_secs(response, damping_fraction),
            AnimationCurve::Smooth => spring_settle_secs(SMOOTH_RESPONSE, 1.0),
            AnimationCurve::EaseOut { duration }
            | AnimationCurve::EaseInOut { duration }
            | AnimationCurve::Linear { duration } => sanitize_secs(duration),
            AnimationCurve::Default => DEFAULT_CURVE_DURATION,
        };
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }

    /// Progress of the animation after `elapsed`.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f32 {
        let total = self.settle_duration().as_secs_f32();
        let t = elapsed.as_secs_f32();
        if total <= 0.0 || t >= total {
            return 1.0;
        }
        match self {
            AnimationCurve::Spring {
                response,
                damping_fraction,
            } => spring_position(response, damping_fraction, t),
            AnimationCurve::Smooth => spring_position(SMOOTH_RESPONSE, 1.0, t),
            AnimationCurve::EaseOut { .. } => {
                let x = t / total;
                1.0 - (1.0 - x).powi(3)
            }
            AnimationCurve::EaseInOut { .. } | AnimationCurve::Default => {
                ease_in_out_cubic(t / total)
            }
            AnimationCurve::Linear { .. } => t / total,
        }
    }

    /// Returns true once `elapsed` covers the whole curve.
    #[must_use]
    pub fn is_finished(self, elapsed: Duration) -> bool {
        elapsed >= self.settle_duration()
    }
}

fn sanitize_secs(secs: f32) -> f32 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_damping(damping_fraction: f32) -> f32 {
    if damping_fraction.is_finite() {
        damping_fraction.clamp(0.01, 1.0)
    } else {
        1.0
    }
}

fn spring_settle_secs(response: f32, damping_fraction: f32) -> f32 {
    let response = sanitize_secs(response);
    if response == 0.0 {
        return 0.0;
    }
    let omega = TAU / response;
    let zeta = sanitize_damping(damping_fraction);
    if zeta >= 1.0 {
        CRITICAL_SETTLE_FACTOR / omega
    } else {
        (1.0 / SETTLE_TOLERANCE).ln() / (zeta * omega)
    }
}

fn spring_position(response: f32, damping_fraction: f32, t: f32) -> f32 {
    let omega = TAU / response;
    let zeta = sanitize_damping(damping_fraction);
    if zeta >= 1.0 {
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    } else {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        1.0 - decay * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
    }
}

fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// How page content appears when the selected tab changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTransition {
    /// Swap instantly.
    Identity,
    /// Cross-fade.
    #[default]
    Opacity,
    Slide,
    Scale,
    Move,
}

impl ContentTransition {
    /// Identity and cross-fade involve no motion.
    #[must_use]
    pub fn is_trivial(self) -> bool {
        matches!(self, ContentTransition::Identity | ContentTransition::Opacity)
    }

    /// Motion-free counterpart used under reduced motion.
    #[must_use]
    pub fn without_motion(self) -> Self {
        if self.is_trivial() {
            self
        } else {
            ContentTransition::Opacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_curve_is_a_spring() {
        assert!(AnimationCurve::default().is_spring());
        assert!(!AnimationCurve::Default.is_spring());
    }

    #[test]
    fn progress_starts_at_zero_and_ends_at_one() {
        let curves = [
            AnimationCurve::default(),
            AnimationCurve::Smooth,
            AnimationCurve::EaseOut { duration: 0.2 },
            AnimationCurve::EaseInOut { duration: 0.4 },
            AnimationCurve::Linear { duration: 1.0 },
            AnimationCurve::Default,
        ];
        for curve in curves {
            assert_abs_diff_eq!(curve.progress(Duration::ZERO), 0.0, epsilon = 1e-4);
            let end = curve.settle_duration();
            assert_abs_diff_eq!(curve.progress(end), 1.0);
            assert!(curve.is_finished(end));
        }
    }

    #[test]
    fn linear_is_proportional() {
        let curve = AnimationCurve::Linear { duration: 1.0 };
        assert_abs_diff_eq!(
            curve.progress(Duration::from_millis(250)),
            0.25,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        let curve = AnimationCurve::EaseInOut { duration: 1.0 };
        assert_abs_diff_eq!(curve.progress(Duration::from_millis(500)), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let curve = AnimationCurve::Spring {
            response: 0.3,
            damping_fraction: 0.3,
        };
        let peak = (1..100)
            .map(|ms| curve.progress(Duration::from_millis(ms * 5)))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn default_spring_settles_within_half_a_second() {
        let secs = AnimationCurve::default().settle_duration().as_secs_f32();
        assert!(secs > 0.3 && secs < 0.5, "settle {secs}");
    }

    #[test]
    fn zero_duration_is_instant() {
        let curve = AnimationCurve::Linear { duration: 0.0 };
        assert_eq!(curve.settle_duration(), Duration::ZERO);
        assert_abs_diff_eq!(curve.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn non_finite_duration_is_instant() {
        let curve = AnimationCurve::EaseOut {
            duration: f32::NAN,
        };
        assert_eq!(curve.settle_duration(), Duration::ZERO);
    }

    #[test]
    fn huge_duration_saturates() {
        let curve = AnimationCurve::Linear { duration: 1e20 };
        assert_eq!(curve.settle_duration(), Duration::MAX);
        assert!(!curve.is_finished(Duration::from_millis(16)));
        assert!(curve.progress(Duration::from_millis(16)) < F32_EPSILON);
    }

    #[test]
    fn transitions_lose_motion() {
        assert_eq!(ContentTransition::Slide.without_motion(), ContentTransition::Opacity);
        assert_eq!(ContentTransition::Move.without_motion(), ContentTransition::Opacity);
        assert_eq!(
            ContentTransition::Identity.without_motion(),
            ContentTransition::Identity
        );
    }
}
