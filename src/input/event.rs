//! Event types produced by the decoder.
//!
//! These are the protocol between the decoder and the stroke engine.
//! An event lives for exactly one loop iteration.

use crate::canvas::Point;

/// A decoded pointer or control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button went down at a zero-based canvas position.
    Press(Point),

    /// Pointer moved while the primary button was held.
    Drag(Point),

    /// Primary button was released.
    Release,

    /// The user asked to leave (`q` or `ESC q`).
    Quit,

    /// A sequence was recognized as a report but carries nothing we draw with.
    Unknown,
}
