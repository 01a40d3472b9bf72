//! Error type for the drawing session.
//!
//! Only fatal conditions live here. Malformed input and off-canvas
//! coordinates are absorbed where they occur and never reach this type.

use std::io;

/// Errors that end a drawing session.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The canvas could not be encoded as an image payload.
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// The configuration cannot produce a usable canvas.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
