//! A single eased ramp from a start value to a target.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Values a ramp can interpolate.
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `target` by `t` in `[0, 1]`.
    #[must_use]
    fn lerp_to(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

/// Time-bounded interpolation of a value.
///
/// The ramp holds:
/// - Start and target values
/// - Start instant and duration
/// - The easing curve applied to raw progress
#[derive(Debug, Clone, Copy)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Ramp from `from` to `to` beginning at `start`.
    pub fn new(
        from: T,
        to: T,
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Calculate normalized progress (0.0 to 1.0).
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the ramp has reached its target.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased value at `now`. Returns the exact target once complete.
    pub fn sample(&self, now: Instant) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.evaluate(t))
    }
}
