//! Input event types fed to the engine by the host window loop.

/// Platform-agnostic input events.
pub mod event;

pub use event::InputEvent;
