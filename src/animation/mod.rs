//! Cooperative tween scheduler.
//!
//! Ramps are plain values advanced by explicit timestamps from the host's
//! frame loop. Each animated channel owns a [`TweenSlot`]; starting a new
//! ramp on a slot cancels the previous one.

mod slot;
mod tween;

pub use slot::{TweenHandle, TweenSlot};
pub use tween::{Lerp, Tween};
