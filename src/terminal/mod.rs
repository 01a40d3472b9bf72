//! Terminal module: everything that talks escape sequences to the terminal.
//!
//! - [`OutputBuffer`]: Frame assembly, flushed in one write
//! - [`graphics`]: Kitty graphics protocol transmission of PNG frames
//! - [`TerminalGuard`]: Raw mode + mouse tracking, released on every exit path
//! - [`query_pixel_width`]: `CSI 14 t` window-size query with fallback

mod commands;
pub mod graphics;
mod guard;
mod output;
mod size;

pub use commands::{DisableTracking, EnableTracking, QueryWindowPixels, TrackingModes};
pub use guard::TerminalGuard;
pub use output::OutputBuffer;
pub use size::{parse_window_size_reply, query_pixel_width};
