//! Input: from terminal bytes to pointer events.
//!
//! - [`InputReader`]: Thread that forwards raw stdin chunks over a channel
//! - [`Decoder`]: State machine turning bytes into [`PointerEvent`]s
//!
//! ```text
//! ┌──────────────┐   Vec<u8>   ┌──────────────┐  PointerEvent  ┌──────────────┐
//! │ InputReader  │ ──────────▶ │   Decoder    │ ─────────────▶ │ StrokeEngine │
//! └──────────────┘             └──────────────┘                └──────────────┘
//! ```

mod decoder;
mod event;
mod reader;

pub use decoder::Decoder;
pub use event::PointerEvent;
pub use reader::InputReader;
