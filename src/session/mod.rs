//! Session: configuration and the draw loop.

mod config;
#[allow(clippy::module_inception)]
mod session;

pub use config::SketchConfig;
pub use session::{run, ExitReason, Session, SessionSummary};
