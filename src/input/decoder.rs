//! Decoder: byte-at-a-time state machine for SGR mouse reports.
//!
//! Recognizes exactly what the session enables:
//!
//! ```text
//! ESC [ < button ; x ; y M     press (button 0) or drag (button 32)
//! ESC [ < button ; x ; y m     release (button 0)
//! q  |  ESC q                  quit
//! ```
//!
//! Anything else is discarded and decoding resumes at `Ground`, so a
//! malformed frame never desynchronizes the stream. Coordinates arrive
//! one-based and leave zero-based.

use super::event::PointerEvent;
use crate::canvas::Point;

const ESC: u8 = 0x1B;

/// Parameter bytes accepted before a report is abandoned as garbage.
const MAX_PARAM_LEN: usize = 32;

/// SGR button code for "primary button".
const BUTTON_PRIMARY: i32 = 0;
/// SGR button code for "primary button held while moving" (motion bit 32 set).
const BUTTON_PRIMARY_MOTION: i32 = 32;

/// Decoder states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Between sequences.
    #[default]
    Ground,
    /// `ESC` read.
    Escape,
    /// `ESC [` read.
    Csi,
    /// `ESC [ <` read; accumulating `button;x;y` until `M` or `m`.
    MouseParams,
}

/// Streaming input decoder.
///
/// Feed bytes one at a time with [`feed`](Decoder::feed) or in chunks
/// with [`advance`](Decoder::advance). Partial sequences are held across
/// calls and emit nothing until their terminator arrives.
#[derive(Debug, Default)]
pub struct Decoder {
    state: State,
    params: Vec<u8>,
}

impl Decoder {
    /// Create a decoder in the `Ground` state.
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            params: Vec::with_capacity(MAX_PARAM_LEN),
        }
    }

    /// Whether a sequence is partially read.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Feed a chunk of bytes and collect every event it completes.
    pub fn advance(&mut self, bytes: &[u8]) -> Vec<PointerEvent> {
        bytes.iter().filter_map(|&byte| self.feed(byte)).collect()
    }

    /// Feed a single byte.
    pub fn feed(&mut self, byte: u8) -> Option<PointerEvent> {
        match self.state {
            State::Ground => match byte {
                ESC => {
                    self.state = State::Escape;
                    None
                }
                b'q' => Some(PointerEvent::Quit),
                _ => None,
            },

            State::Escape => match byte {
                b'[' => {
                    self.state = State::Csi;
                    None
                }
                b'q' => {
                    self.state = State::Ground;
                    Some(PointerEvent::Quit)
                }
                // A second ESC starts a fresh sequence.
                ESC => None,
                _ => {
                    self.state = State::Ground;
                    None
                }
            },

            State::Csi => {
                if byte == b'<' {
                    self.params.clear();
                    self.state = State::MouseParams;
                    None
                } else {
                    self.state = State::Ground;
                    Some(PointerEvent::Unknown)
                }
            }

            State::MouseParams => match byte {
                b'M' | b'm' => {
                    let event = decode_report(&self.params, byte == b'M');
                    self.reset();
                    Some(event)
                }
                ESC => {
                    self.params.clear();
                    self.state = State::Escape;
                    Some(PointerEvent::Unknown)
                }
                _ if self.params.len() >= MAX_PARAM_LEN => {
                    self.reset();
                    Some(PointerEvent::Unknown)
                }
                _ => {
                    self.params.push(byte);
                    None
                }
            },
        }
    }

    fn reset(&mut self) {
        self.params.clear();
        self.state = State::Ground;
    }
}

/// Turn `button;x;y` plus its terminator into an event.
fn decode_report(params: &[u8], pressed: bool) -> PointerEvent {
    let mut fields = params.split(|&b| b == b';').map(parse_decimal);
    let (Some(Some(button)), Some(Some(x)), Some(Some(y))) =
        (fields.next(), fields.next(), fields.next())
    else {
        return PointerEvent::Unknown;
    };

    match (button, pressed) {
        (BUTTON_PRIMARY, true) => PointerEvent::Press(Point::from_one_based(x, y)),
        (BUTTON_PRIMARY_MOTION, true) => PointerEvent::Drag(Point::from_one_based(x, y)),
        (BUTTON_PRIMARY, false) => PointerEvent::Release,
        _ => PointerEvent::Unknown,
    }
}

/// Parse an unsigned decimal field straight from bytes.
fn parse_decimal(field: &[u8]) -> Option<i32> {
    if field.is_empty() {
        return None;
    }
    field.iter().try_fold(0i32, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(i32::from(b - b'0'))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<PointerEvent> {
        Decoder::new().advance(bytes)
    }

    #[test]
    fn test_press_de_offsets_coordinates() {
        assert_eq!(
            decode(b"\x1b[<0;11;21M"),
            vec![PointerEvent::Press(Point::new(10, 20))]
        );
        assert_eq!(
            decode(b"\x1b[<0;10;20M"),
            vec![PointerEvent::Press(Point::new(9, 19))]
        );
    }

    #[test]
    fn test_drag_and_release() {
        assert_eq!(
            decode(b"\x1b[<32;5;7M"),
            vec![PointerEvent::Drag(Point::new(4, 6))]
        );
        assert_eq!(decode(b"\x1b[<0;11;21m"), vec![PointerEvent::Release]);
    }

    #[test]
    fn test_other_buttons_are_unknown() {
        // Right button, plain motion, primary with shift, drag release.
        assert_eq!(decode(b"\x1b[<2;1;1M"), vec![PointerEvent::Unknown]);
        assert_eq!(decode(b"\x1b[<35;1;1M"), vec![PointerEvent::Unknown]);
        assert_eq!(decode(b"\x1b[<4;1;1M"), vec![PointerEvent::Unknown]);
        assert_eq!(decode(b"\x1b[<32;1;1m"), vec![PointerEvent::Unknown]);
    }

    #[test]
    fn test_quit_plain_and_escaped() {
        assert_eq!(decode(b"q"), vec![PointerEvent::Quit]);
        assert_eq!(decode(b"\x1bq"), vec![PointerEvent::Quit]);
    }

    #[test]
    fn test_ground_ignores_other_bytes() {
        assert!(decode(b"hello world 123;\r\n").is_empty());
    }

    #[test]
    fn test_truncated_report_waits_for_terminator() {
        let mut decoder = Decoder::new();
        assert!(decoder.advance(b"\x1b[<0;11").is_empty());
        assert!(decoder.has_pending());
        assert!(decoder.advance(b";21").is_empty());
        assert_eq!(
            decoder.advance(b"M"),
            vec![PointerEvent::Press(Point::new(10, 20))]
        );
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_too_few_fields_is_unknown() {
        assert_eq!(decode(b"\x1b[<0;11M"), vec![PointerEvent::Unknown]);
        assert_eq!(decode(b"\x1b[<M"), vec![PointerEvent::Unknown]);
    }

    #[test]
    fn test_non_numeric_fields_are_unknown() {
        assert_eq!(decode(b"\x1b[<0;a;5M"), vec![PointerEvent::Unknown]);
        assert_eq!(decode(b"\x1b[<0;;5M"), vec![PointerEvent::Unknown]);
        assert_eq!(
            decode(b"\x1b[<0;99999999999;5M"),
            vec![PointerEvent::Unknown]
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        assert_eq!(
            decode(b"\x1b[<0;3;4;9M"),
            vec![PointerEvent::Press(Point::new(2, 3))]
        );
    }

    #[test]
    fn test_zero_coordinate_goes_negative() {
        assert_eq!(
            decode(b"\x1b[<0;0;1M"),
            vec![PointerEvent::Press(Point::new(-1, 0))]
        );
    }

    #[test]
    fn test_non_mouse_csi_is_unknown_and_resyncs() {
        // Arrow key, then a valid press.
        assert_eq!(
            decode(b"\x1b[A\x1b[<0;2;2M"),
            vec![PointerEvent::Unknown, PointerEvent::Press(Point::new(1, 1))]
        );
    }

    #[test]
    fn test_unrecognized_escape_returns_to_ground() {
        assert_eq!(
            decode(b"\x1bx\x1b[<0;2;2m"),
            vec![PointerEvent::Release]
        );
        // ESC ESC [ ... still decodes the report.
        assert_eq!(decode(b"\x1b\x1b[<0;2;2m"), vec![PointerEvent::Release]);
    }

    #[test]
    fn test_escape_inside_report_aborts_it() {
        assert_eq!(
            decode(b"\x1b[<0;11\x1b[<0;3;3M"),
            vec![PointerEvent::Unknown, PointerEvent::Press(Point::new(2, 2))]
        );
    }

    #[test]
    fn test_runaway_report_is_abandoned() {
        let mut bytes = b"\x1b[<".to_vec();
        bytes.extend(std::iter::repeat(b'1').take(MAX_PARAM_LEN + 1));
        let events = decode(&bytes);
        assert_eq!(events, vec![PointerEvent::Unknown]);

        // Stream continues normally afterwards.
        let mut decoder = Decoder::new();
        decoder.advance(&bytes);
        assert_eq!(decoder.advance(b"q"), vec![PointerEvent::Quit]);
    }

    #[test]
    fn test_kitty_acknowledgement_is_ignored() {
        assert!(decode(b"\x1b_Gi=1;OK\x1b\\").is_empty());
    }

    #[test]
    fn test_stream_of_mixed_events() {
        let events = decode(b"\x1b[<0;5;5M\x1b[<32;6;5M\x1b[<32;7;5M\x1b[<0;7;5mq");
        assert_eq!(
            events,
            vec![
                PointerEvent::Press(Point::new(4, 4)),
                PointerEvent::Drag(Point::new(5, 4)),
                PointerEvent::Drag(Point::new(6, 4)),
                PointerEvent::Release,
                PointerEvent::Quit,
            ]
        );
    }
}
