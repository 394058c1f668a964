//! Hover interaction state machine.
//!
//! Consumes resolver results and turns them into eased ramps of the
//! broadcast hover strength and focus point, plus a subtle camera drift
//! toward the pointer.

mod machine;

pub use machine::{HoverState, InteractionMachine, InteractionState};
