//! Terminal commands that crossterm does not ship.
//!
//! crossterm's `EnableMouseCapture` does not include SGR pixel reporting
//! (private mode 1016), which is what makes reported positions canvas
//! pixels instead of character cells. These commands write the exact
//! private-mode toggles the session needs.

use bitflags::bitflags;
use crossterm::Command;
use std::fmt;

bitflags! {
    /// Mouse tracking private modes.
    ///
    /// # Example
    /// ```
    /// use sketchpad::TrackingModes;
    /// let modes = TrackingModes::CLICKS | TrackingModes::SGR;
    /// assert_eq!(modes.private_modes().collect::<Vec<_>>(), vec![1000, 1006]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackingModes: u8 {
        /// Button press and release reports (1000).
        const CLICKS = 0b0001;
        /// Motion reports whether or not a button is held (1003).
        const ANY_MOTION = 0b0010;
        /// SGR extended report encoding (1006).
        const SGR = 0b0100;
        /// SGR reports in pixels rather than cells (1016).
        const SGR_PIXELS = 0b1000;
    }
}

impl TrackingModes {
    /// DEC private mode number for each flag, lowest first.
    const MODE_NUMBERS: [(Self, u16); 4] = [
        (Self::CLICKS, 1000),
        (Self::ANY_MOTION, 1003),
        (Self::SGR, 1006),
        (Self::SGR_PIXELS, 1016),
    ];

    /// Private mode numbers of the enabled flags, in ascending order.
    pub fn private_modes(self) -> impl DoubleEndedIterator<Item = u16> {
        Self::MODE_NUMBERS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, mode)| mode)
    }
}

impl Default for TrackingModes {
    fn default() -> Self {
        Self::all()
    }
}

/// Enable mouse tracking modes, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnableTracking(pub TrackingModes);

impl Command for EnableTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for mode in self.0.private_modes() {
            write!(f, "\x1b[?{mode}h")?;
        }
        Ok(())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Disable mouse tracking modes, in the reverse of enable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisableTracking(pub TrackingModes);

impl Command for DisableTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for mode in self.0.private_modes().rev() {
            write!(f, "\x1b[?{mode}l")?;
        }
        Ok(())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Ask the terminal for its window size in pixels (`CSI 14 t`).
///
/// The reply is `CSI 4 ; height ; width t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindowPixels;

impl Command for QueryWindowPixels {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[14t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi(command: &impl Command) -> String {
        let mut s = String::new();
        command.write_ansi(&mut s).unwrap();
        s
    }

    #[test]
    fn test_default_modes_enable_in_order() {
        assert_eq!(
            ansi(&EnableTracking(TrackingModes::default())),
            "\x1b[?1000h\x1b[?1003h\x1b[?1006h\x1b[?1016h"
        );
    }

    #[test]
    fn test_disable_is_reverse_order() {
        assert_eq!(
            ansi(&DisableTracking(TrackingModes::default())),
            "\x1b[?1016l\x1b[?1006l\x1b[?1003l\x1b[?1000l"
        );
    }

    #[test]
    fn test_subset_of_modes() {
        let modes = TrackingModes::CLICKS | TrackingModes::SGR;
        assert_eq!(ansi(&EnableTracking(modes)), "\x1b[?1000h\x1b[?1006h");
        assert_eq!(ansi(&EnableTracking(TrackingModes::empty())), "");
    }

    #[test]
    fn test_query_window_pixels() {
        assert_eq!(ansi(&QueryWindowPixels), "\x1b[14t");
    }
}
