//! Shared utilities.
//!
//! Easing curves used by the animation ramps.

pub mod easing;
