/// Platform-agnostic input events.
///
/// Hosts translate their window events into these and forward them to
/// [`Engine::handle_input`](crate::engine::Engine::handle_input).
///
/// # Example
///
/// ```ignore
/// engine.handle_input(InputEvent::PointerMoved { x: 100.0, y: 200.0 }, Instant::now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
