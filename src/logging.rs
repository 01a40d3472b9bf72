//! Logging setup.
//!
//! The terminal belongs to the canvas, so nothing may be logged to stdout
//! or stderr while a session runs. Events go to a file in the system temp
//! directory instead, filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name of the session log.
pub const LOG_FILE_NAME: &str = "sketchpad.log";

/// Full path of the session log.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global subscriber writing to [`log_path`].
///
/// The returned guard flushes buffered events when dropped; keep it alive
/// until the process exits. Returns `None` if a subscriber was already
/// installed.
pub fn init() -> Option<WorkerGuard> {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()
        .map(|()| guard)
}
