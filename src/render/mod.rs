//! Render pacing.
//!
//! [`RenderScheduler`] holds the dirty flag and frame clock that decide
//! when the canvas is worth re-transmitting.

mod scheduler;

pub use scheduler::{FrameStats, RenderScheduler};
