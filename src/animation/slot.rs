//! One animated channel with overwrite-on-retarget semantics.

use web_time::{Duration, Instant};

use super::tween::{Lerp, Tween};
use crate::util::easing::EasingFunction;

/// Cancellation token for one started ramp on a [`TweenSlot`].
///
/// A handle dies when the slot is canceled or its ramp completes. Starting a
/// new ramp cancels the slot first, so older handles die then too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenHandle {
    generation: u64,
}

/// Holds at most one in-flight ramp for a single channel.
///
/// Starting a ramp replaces whatever was running: the superseded ramp is
/// dropped without producing a final value, and ticks through its handle
/// yield nothing, so it can never interleave with its replacement.
#[derive(Debug, Clone)]
pub struct TweenSlot<T> {
    tween: Option<Tween<T>>,
    generation: u64,
}

impl<T: Lerp> Default for TweenSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lerp> TweenSlot<T> {
    /// Empty slot with no ramp in flight.
    pub fn new() -> Self {
        Self {
            tween: None,
            generation: 0,
        }
    }

    /// Start a ramp, canceling any in-flight one on this slot.
    pub fn start(
        &mut self,
        from: T,
        to: T,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> TweenHandle {
        self.cancel();
        self.tween = Some(Tween::new(from, to, now, duration, easing));
        TweenHandle {
            generation: self.generation,
        }
    }

    /// Advance the ramp named by `handle` to `now`.
    ///
    /// Returns the current value while that ramp is in flight and `None`
    /// for a dead handle. The tick that reaches completion returns the exact
    /// target and empties the slot.
    pub fn tick(&mut self, handle: TweenHandle, now: Instant) -> Option<T> {
        if !self.is_live(handle) {
            return None;
        }
        let tween = self.tween.as_ref()?;
        let value = tween.sample(now);
        if tween.is_complete(now) {
            self.tween = None;
        }
        Some(value)
    }

    /// Value the in-flight ramp would produce at `now`, without advancing.
    pub fn peek(&self, now: Instant) -> Option<T> {
        self.tween.as_ref().map(|tween| tween.sample(now))
    }

    /// Drop the in-flight ramp without a final write and kill every handle
    /// issued so far.
    pub fn cancel(&mut self) {
        self.tween = None;
        self.generation += 1;
    }

    /// Whether `handle` still names the in-flight ramp.
    pub fn is_live(&self, handle: TweenHandle) -> bool {
        self.tween.is_some() && handle.generation == self.generation
    }
}
