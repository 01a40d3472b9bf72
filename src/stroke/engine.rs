//! Stroke Engine: pointer events in, canvas paint out.
//!
//! The engine owns pen continuity. Consecutive in-bounds samples are
//! joined with capsules so fast pointer motion leaves no gaps; leaving the
//! canvas or releasing the button breaks the chain, and the next sample
//! starts a fresh disc instead of a line back to a stale anchor.

use crate::canvas::{Canvas, Color, Point};
use crate::input::PointerEvent;

/// The single fixed brush: a filled disc of `radius` in `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Disc radius in pixels. `0` paints single pixels.
    pub radius: u32,
    /// Paint color.
    pub color: Color,
}

impl Brush {
    /// Create a brush.
    pub const fn new(radius: u32, color: Color) -> Self {
        Self { radius, color }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(5, Color::WHITE)
    }
}

/// Pen continuity state.
///
/// Invariant: `last_point` is `None` whenever `is_down` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenState {
    /// Primary button is held.
    is_down: bool,
    /// Last in-bounds sample of the current stroke.
    last_point: Option<Point>,
}

impl PenState {
    /// Lift the pen and forget the anchor.
    fn lift(&mut self) {
        self.is_down = false;
        self.last_point = None;
    }
}

/// Applies pointer events to a canvas.
#[derive(Debug, Clone, Default)]
pub struct StrokeEngine {
    brush: Brush,
    pen: PenState,
}

impl StrokeEngine {
    /// Create an engine with a lifted pen.
    pub fn new(brush: Brush) -> Self {
        Self {
            brush,
            pen: PenState::default(),
        }
    }

    /// Apply one event. Returns `true` if canvas pixels were painted.
    ///
    /// `Quit` and `Unknown` never paint; stopping on `Quit` is the
    /// session loop's job.
    pub fn apply(&mut self, event: PointerEvent, canvas: &mut Canvas) -> bool {
        match event {
            PointerEvent::Press(point) => self.press(point, canvas),
            PointerEvent::Drag(point) => self.drag(point, canvas),
            PointerEvent::Release => {
                self.pen.lift();
                false
            }
            PointerEvent::Quit | PointerEvent::Unknown => false,
        }
    }

    fn press(&mut self, point: Point, canvas: &mut Canvas) -> bool {
        self.pen.is_down = true;
        if !canvas.contains(point) {
            // Pen is down but has no anchor to draw from.
            self.pen.last_point = None;
            return false;
        }
        canvas.stamp(point, self.brush.radius, self.brush.color);
        self.pen.last_point = Some(point);
        true
    }

    fn drag(&mut self, point: Point, canvas: &mut Canvas) -> bool {
        if !self.pen.is_down {
            return false;
        }
        if !canvas.contains(point) {
            self.pen.last_point = None;
            return false;
        }

        match self.pen.last_point {
            Some(last) if last == point => return false,
            Some(last) => canvas.stroke(last, point, self.brush.radius, self.brush.color),
            None => canvas.stamp(point, self.brush.radius, self.brush.color),
        }
        self.pen.last_point = Some(point);
        true
    }
}
