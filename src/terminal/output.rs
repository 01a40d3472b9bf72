//! `OutputBuffer`: a whole frame, assembled in memory and written once.

use std::io::{self, Write};

const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Application Program Command introducer for kitty graphics.
const APC_GRAPHICS: &[u8] = b"\x1b_G";
/// String terminator closing an APC.
const ST: &[u8] = b"\x1b\\";

/// Byte buffer holding one frame's escape sequences.
///
/// A frame (screen clear plus every image chunk) is accumulated here and
/// handed to the terminal in a single `write_all`, so the terminal never
/// sees a half-transmitted image.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    /// Buffer with room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Empty buffer.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Drop the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Frame bytes so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append bytes verbatim.
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Append UTF-8 text verbatim.
    #[inline]
    pub fn push_str(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    /// `ESC [ 2 J`.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.push_bytes(CLEAR_SCREEN);
    }

    /// `ESC [ H`.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.push_bytes(CURSOR_HOME);
    }

    /// Append one complete graphics command: `ESC _ G <control> ; <payload> ESC \`.
    pub fn graphics_command(&mut self, control: &str, payload: &[u8]) {
        self.push_bytes(APC_GRAPHICS);
        self.push_str(control);
        self.bytes.push(b';');
        self.push_bytes(payload);
        self.push_bytes(ST);
    }

    /// Write the frame to `writer` with one `write_all`, then flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()
    }
}
