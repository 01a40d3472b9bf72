//! Canvas module: the raster drawing surface.
//!
//! This module contains:
//! - [`Canvas`]: A fixed-size RGBA raster with disc and capsule primitives
//! - [`Color`]: RGBA paint
//! - [`Point`]: Signed pixel coordinates

#[allow(clippy::module_inception)]
mod canvas;
mod color;
mod point;

pub use canvas::Canvas;
pub use color::Color;
pub use point::Point;
