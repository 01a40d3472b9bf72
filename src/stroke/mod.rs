//! Stroke module: turning pointer samples into paint.
//!
//! - [`StrokeEngine`]: Applies events to the canvas and tracks pen continuity
//! - [`Brush`]: The fixed radius and color used for every mark
//! - [`PenState`]: Whether the pen is down and where the current stroke ends

mod engine;

pub use engine::{Brush, PenState, StrokeEngine};
