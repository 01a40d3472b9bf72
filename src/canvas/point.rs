//! Point: a signed pixel coordinate.
//!
//! Signed because decoded pointer positions can land left of or above
//! the canvas (a one-based report of `0` de-offsets to `-1`).

/// A pixel position on (or off) the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column in pixels, zero-based.
    pub x: i32,
    /// Row in pixels, zero-based.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a one-based terminal report to a zero-based point.
    #[inline]
    pub const fn from_one_based(x: i32, y: i32) -> Self {
        Self::new(x.saturating_sub(1), y.saturating_sub(1))
    }
}
