//! Sketchpad binary: draw with the mouse, press `q` to quit.

use anyhow::Context;
use sketchpad::{logging, SketchConfig};

fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init();

    let config = SketchConfig::default();
    let summary = sketchpad::run(&config).context("drawing session failed")?;

    tracing::info!(
        frames = summary.frames,
        events = summary.events,
        "exiting"
    );
    Ok(())
}
