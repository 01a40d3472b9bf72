//! Kitty graphics protocol transmission.
//!
//! A PNG payload is base64-encoded and sent as one or more APC
//! sequences:
//!
//! ```text
//! ESC _ G f=100,a=T,t=d,i=<id>,q=2,m=1 ; <chunk> ESC \
//! ESC _ G m=1 ; <chunk> ESC \
//! ESC _ G m=0 ; <last chunk> ESC \
//! ```
//!
//! `a=T` transmits and displays, `f=100` marks PNG, `t=d` sends the data
//! inline, `i` keeps one stable image that each frame replaces, and `q=2`
//! silences acknowledgements so nothing is echoed back into the input
//! stream.

use super::output::OutputBuffer;
use base64::{engine::general_purpose, Engine as _};

/// Largest base64 chunk the protocol accepts per escape sequence.
pub const MAX_CHUNK_LEN: usize = 4096;

/// Append the transmission of a PNG image to `out`.
pub fn write_png(out: &mut OutputBuffer, image_id: u32, png: &[u8]) {
    let encoded = general_purpose::STANDARD.encode(png);
    let chunks: Vec<&[u8]> = if encoded.is_empty() {
        vec![b"".as_slice()]
    } else {
        encoded.as_bytes().chunks(MAX_CHUNK_LEN).collect()
    };
    let last = chunks.len() - 1;

    for (i, chunk) in chunks.into_iter().enumerate() {
        let more = u8::from(i < last);
        let control = if i == 0 {
            format!("f=100,a=T,t=d,i={image_id},q=2,m={more}")
        } else {
            format!("m={more}")
        };
        out.graphics_command(&control, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split a transmission into `(control, payload)` pairs.
    fn sequences(bytes: &[u8]) -> Vec<(String, String)> {
        let text = std::str::from_utf8(bytes).unwrap();
        text.split("\x1b\\")
            .filter(|s| !s.is_empty())
            .map(|s| {
                let body = s.strip_prefix("\x1b_G").unwrap();
                let (control, payload) = body.split_once(';').unwrap();
                (control.to_string(), payload.to_string())
            })
            .collect()
    }

    #[test]
    fn test_small_payload_single_sequence() {
        let mut out = OutputBuffer::new();
        write_png(&mut out, 7, b"hello");

        let seqs = sequences(out.as_bytes());
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].0, "f=100,a=T,t=d,i=7,q=2,m=0");
        assert_eq!(seqs[0].1, "aGVsbG8=");
    }

    #[test]
    fn test_large_payload_is_chunked() {
        // 7000 raw bytes -> 9336 base64 chars -> 3 chunks.
        let png = vec![0xABu8; 7000];
        let mut out = OutputBuffer::new();
        write_png(&mut out, 1, &png);

        let seqs = sequences(out.as_bytes());
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0].0, "f=100,a=T,t=d,i=1,q=2,m=1");
        assert_eq!(seqs[1].0, "m=1");
        assert_eq!(seqs[2].0, "m=0");
        assert_eq!(seqs[0].1.len(), MAX_CHUNK_LEN);
        assert_eq!(seqs[1].1.len(), MAX_CHUNK_LEN);

        let joined: String = seqs.iter().map(|(_, p)| p.as_str()).collect();
        assert_eq!(general_purpose::STANDARD.decode(joined).unwrap(), png);
    }

    #[test]
    fn test_exact_chunk_boundary() {
        // 3072 raw bytes -> exactly 4096 base64 chars -> 1 chunk.
        let mut out = OutputBuffer::new();
        write_png(&mut out, 1, &[0u8; 3072]);
        let seqs = sequences(out.as_bytes());
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].0, "f=100,a=T,t=d,i=1,q=2,m=0");
    }

    #[test]
    fn test_empty_payload_still_terminates() {
        let mut out = OutputBuffer::new();
        write_png(&mut out, 1, &[]);
        assert_eq!(out.as_bytes(), b"\x1b_Gf=100,a=T,t=d,i=1,q=2,m=0;\x1b\\");
    }
}
