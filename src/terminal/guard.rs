//! Terminal guard: raw mode and mouse tracking as a scoped resource.
//!
//! Acquiring the guard puts the terminal in raw mode, clears the screen
//! and enables mouse tracking. Dropping it undoes both, whatever path
//! left the scope. Because release builds abort on panic (no unwinding,
//! no `Drop`), a process-wide panic hook performs the same restore.

use super::commands::{DisableTracking, EnableTracking, TrackingModes};
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::Once;

/// Panic hook guard: installed at most once per process.
static PANIC_HOOK: Once = Once::new();

/// Holds the terminal in drawing mode for as long as it lives.
#[derive(Debug)]
pub struct TerminalGuard {
    /// Tracking modes to disable on release.
    modes: TrackingModes,
}

impl TerminalGuard {
    /// Enter raw mode, clear the screen and enable `modes`.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be entered or the enable
    /// sequences cannot be written. Anything already acquired is released
    /// before the error is returned.
    pub fn acquire(modes: TrackingModes) -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        // From here on, Drop restores the terminal even if setup fails.
        let guard = Self { modes };

        let mut stdout = io::stdout();
        execute!(
            stdout,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            EnableTracking(modes)
        )?;

        tracing::debug!(?modes, "terminal acquired");
        Ok(guard)
    }

}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.modes);
        tracing::debug!("terminal restored");
    }
}

/// Disable tracking and leave raw mode. Best-effort, ignores errors.
fn restore(modes: TrackingModes) {
    let _ = write_restore(&mut io::stdout(), modes);
    let _ = terminal::disable_raw_mode();
}

/// Write the sequences that turn `modes` off, then flush.
fn write_restore<W: Write>(out: &mut W, modes: TrackingModes) -> io::Result<()> {
    execute!(out, DisableTracking(modes))?;
    out.flush()
}

/// Install a panic hook that restores the terminal before reporting.
///
/// Without this, a panic leaves the user's shell in raw mode with every
/// mouse movement spewing reports.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore(TrackingModes::all());
            tracing::error!(target: "sketchpad::panic", %info, "panic");
            previous(info);
        }));
    });
}
