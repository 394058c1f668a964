//! Easing functions for ramp interpolation.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`,
//! so an eased ramp always starts at its origin and settles exactly on its
//! target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for ramp curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow at both ends).
    QuadraticInOut,
    /// Cubic ease-out, a stronger deceleration than quadratic.
    CubicOut,
    /// Sinusoidal ease-in-out.
    SineInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: quadratic ease-out, a gentle deceleration onto the
    /// target.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::SineInOut => {
                -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::QuadraticInOut,
        EasingFunction::CubicOut,
        EasingFunction::SineInOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-6, "{easing:?} at 0");
            let end = easing.evaluate(1.0);
            assert!((end - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_clamping() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), easing.evaluate(0.0));
            assert_eq!(easing.evaluate(1.5), easing.evaluate(1.0));
        }
    }

    #[test]
    fn test_monotonic_curves() {
        for easing in ALL {
            let mut prev = easing.evaluate(0.0);
            for step in 1..=100 {
                let v = easing.evaluate(step as f32 / 100.0);
                assert!(
                    v + 1e-6 >= prev,
                    "{easing:?} decreased at step {step}"
                );
                prev = v;
            }
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
    }

    #[test]
    fn test_in_out_is_symmetric_at_midpoint() {
        let mid = EasingFunction::QuadraticInOut.evaluate(0.5);
        assert!((mid - 0.5).abs() < 1e-6);
        assert!((EasingFunction::SineInOut.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_quadratic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticOut);
    }
}
