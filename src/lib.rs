//! # Sketchpad
//!
//! Freehand drawing in the terminal.
//!
//! Sketchpad turns mouse input into brush strokes on an off-screen RGBA
//! canvas and shows the canvas as an inline image through the kitty
//! graphics protocol. It needs a terminal that reports SGR mouse events
//! (ideally in pixel coordinates) and understands kitty graphics.
//!
//! ## Core Concepts
//!
//! - **Canvas**: Fixed-size RGBA raster with a one-pixel border
//! - **Decoder**: Byte-at-a-time state machine for SGR mouse reports and `q`
//! - **Stroke engine**: Pen state; joins successive samples into gap-free strokes
//! - **Render scheduler**: Dirty flag plus frame-rate ceiling, never drops the last frame
//! - **Session**: Owns all of the above on one thread and drives the loop
//!
//! ## Example
//!
//! ```rust
//! use sketchpad::{Brush, Canvas, Color, Point, PointerEvent, StrokeEngine};
//!
//! let mut canvas = Canvas::new(100, 50, Color::WHITE)?;
//! let mut engine = StrokeEngine::new(Brush::new(5, Color::WHITE));
//!
//! assert!(engine.apply(PointerEvent::Press(Point::new(50, 25)), &mut canvas));
//! assert!(engine.apply(PointerEvent::Drag(Point::new(60, 25)), &mut canvas));
//! assert_eq!(canvas.pixel(Point::new(55, 25)), Some(Color::WHITE));
//! # Ok::<(), sketchpad::SketchError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod canvas;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;
pub mod stroke;
pub mod terminal;

// Re-exports for convenience
pub use canvas::{Canvas, Color, Point};
pub use error::{Result, SketchError};
pub use input::{Decoder, InputReader, PointerEvent};
pub use render::{FrameStats, RenderScheduler};
pub use session::{run, ExitReason, Session, SessionSummary, SketchConfig};
pub use stroke::{Brush, PenState, StrokeEngine};
pub use terminal::{OutputBuffer, TerminalGuard, TrackingModes};
