//! Window-size query: how many pixels wide the canvas can be.
//!
//! The query is written to the terminal and the reply is read back from
//! the same byte channel the session will later decode pointer input from.
//! Any failure (timeout, closed input, garbled reply) falls back to a
//! fixed width; a missing size is never fatal.

use super::commands::QueryWindowPixels;
use crossbeam_channel::Receiver;
use crossterm::execute;
use std::io::Write;
use std::time::{Duration, Instant};

/// Longest reply accepted before giving up on it.
const MAX_REPLY_LEN: usize = 64;

/// Ask the terminal for its pixel width.
///
/// Returns `fallback` if the terminal does not answer within `timeout`
/// or the answer cannot be parsed.
pub fn query_pixel_width<W: Write>(
    out: &mut W,
    input: &Receiver<Vec<u8>>,
    timeout: Duration,
    fallback: u32,
) -> u32 {
    if let Err(e) = execute!(out, QueryWindowPixels) {
        tracing::warn!(error = %e, fallback, "window size query could not be sent");
        return fallback;
    }

    let reply = read_reply(input, timeout);
    match reply.as_deref().and_then(parse_window_size_reply) {
        Some(width) => {
            tracing::debug!(width, "window size reported");
            width
        }
        None => {
            tracing::warn!(
                reply = ?reply.as_deref().map(String::from_utf8_lossy),
                fallback,
                "window size unavailable, using fallback width"
            );
            fallback
        }
    }
}

/// Collect bytes from an `ESC` up to and including the terminating `t`.
///
/// Bytes before the first `ESC` are dropped and each `ESC` restarts the
/// reply, so keypresses (including `t`) and mouse reports ahead of the
/// answer do not spoil it. Returns `None` on timeout, disconnect or
/// overflow.
fn read_reply(input: &Receiver<Vec<u8>>, timeout: Duration) -> Option<Vec<u8>> {
    let deadline = Instant::now() + timeout;
    let mut reply = Vec::with_capacity(MAX_REPLY_LEN);

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let chunk = input.recv_timeout(remaining).ok()?;

        for byte in chunk {
            if byte == 0x1B {
                reply.clear();
            } else if reply.is_empty() {
                continue;
            }
            reply.push(byte);
            if byte == b't' {
                return Some(reply);
            }
            if reply.len() > MAX_REPLY_LEN {
                return None;
            }
        }
    }
}

/// Parse `ESC [ 4 ; height ; width t` and return the width.
pub fn parse_window_size_reply(reply: &[u8]) -> Option<u32> {
    let text = std::str::from_utf8(reply).ok()?;
    let mut fields = text.split(';');
    if fields.next()? != "\x1b[4" {
        return None;
    }
    let _height = fields.next()?;
    let width = fields.next()?.trim_end_matches('t');
    width.parse::<u32>().ok().filter(|&w| w > 0)
}
