//! Session: the loop that ties decoder, stroke engine and scheduler together.
//!
//! ```text
//! bytes ─▶ Decoder ─▶ PointerEvent ─▶ StrokeEngine ─▶ dirty ─▶ RenderScheduler
//!                                                                   │ due
//!                                                                   ▼
//!                                  terminal ◀─ kitty frame ◀─ Canvas::serialize
//! ```
//!
//! Everything here runs on one thread. The only place control leaves the
//! loop is the wait for the next byte chunk, which is bounded by the frame
//! clock while a throttled frame is pending so the last strokes of a burst
//! still reach the screen.

use super::config::SketchConfig;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::input::{Decoder, InputReader, PointerEvent};
use crate::render::RenderScheduler;
use crate::stroke::StrokeEngine;
use crate::terminal::{graphics, query_pixel_width, OutputBuffer, TerminalGuard};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Instant;

/// Why the session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user pressed `q`.
    Quit,
    /// The input stream ended.
    InputClosed,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Why the loop stopped.
    pub exit: ExitReason,
    /// Frames transmitted, including the initial one.
    pub frames: u64,
    /// Bytes written to the terminal by frames.
    pub bytes_written: u64,
    /// Events decoded.
    pub events: u64,
}

/// A drawing session writing frames to `W`.
pub struct Session<W: Write> {
    canvas: Canvas,
    strokes: StrokeEngine,
    scheduler: RenderScheduler,
    decoder: Decoder,
    /// Frame assembly buffer, reused across renders.
    frame: OutputBuffer,
    out: W,
    image_id: u32,
    events: u64,
}

impl<W: Write> Session<W> {
    /// Create a session with a canvas `canvas_width` pixels wide.
    pub fn new(config: &SketchConfig, canvas_width: u32, out: W) -> Result<Self> {
        config.validate()?;
        let canvas_width = if canvas_width == 0 {
            config.fallback_width
        } else {
            canvas_width
        };

        Ok(Self {
            canvas: Canvas::new(canvas_width, config.canvas_height, config.border_color)?,
            strokes: StrokeEngine::new(config.brush),
            scheduler: RenderScheduler::from_fps(config.max_fps),
            decoder: Decoder::new(),
            frame: OutputBuffer::with_capacity(64 * 1024),
            out,
            image_id: config.image_id,
            events: 0,
        })
    }

    /// The canvas being drawn on.
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The render scheduler.
    pub const fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    /// The writer frames go to.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Run until `Quit` or until `input` disconnects.
    ///
    /// The canvas is transmitted once before any input is read.
    pub fn run(&mut self, input: &Receiver<Vec<u8>>) -> Result<SessionSummary> {
        self.render(Instant::now())?;

        let exit = loop {
            let received = match self.scheduler.time_until_due(Instant::now()) {
                None => input.recv().map_err(|_| RecvTimeoutError::Disconnected),
                Some(wait) => input.recv_timeout(wait),
            };

            match received {
                Ok(chunk) => {
                    if self.process(&chunk)?.is_break() {
                        break ExitReason::Quit;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.render_if_due(Instant::now())?;
                }
                Err(RecvTimeoutError::Disconnected) => break ExitReason::InputClosed,
            }
        };

        // The last image stays on screen, so it must show every stroke.
        if self.scheduler.is_dirty() {
            self.render(Instant::now())?;
        }

        let stats = self.scheduler.stats();
        Ok(SessionSummary {
            exit,
            frames: stats.frames,
            bytes_written: stats.bytes_written,
            events: self.events,
        })
    }

    /// Decode a chunk of bytes and apply every event in it, in order.
    ///
    /// Breaks on `Quit`; bytes after the quit are not processed.
    pub fn process(&mut self, bytes: &[u8]) -> Result<ControlFlow<()>> {
        for &byte in bytes {
            let Some(event) = self.decoder.feed(byte) else {
                continue;
            };
            self.events += 1;
            tracing::trace!(?event, "decoded");

            if event == PointerEvent::Quit {
                return Ok(ControlFlow::Break(()));
            }
            if self.strokes.apply(event, &mut self.canvas) {
                self.scheduler.mark_dirty();
            }
            self.render_if_due(Instant::now())?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Render if the scheduler says a frame is due. Returns whether it did.
    fn render_if_due(&mut self, now: Instant) -> Result<bool> {
        if !self.scheduler.should_render(now) {
            return Ok(false);
        }
        self.render(now)?;
        Ok(true)
    }

    /// Serialize the canvas and transmit it as one write.
    fn render(&mut self, now: Instant) -> Result<()> {
        let start = Instant::now();
        let png = self.canvas.serialize()?;

        self.frame.clear();
        self.frame.clear_screen();
        self.frame.cursor_home();
        graphics::write_png(&mut self.frame, self.image_id, &png);
        self.frame.flush_to(&mut self.out)?;

        self.scheduler.commit_render(now);
        let elapsed = start.elapsed();
        self.scheduler.record_frame(self.frame.len(), elapsed);
        tracing::debug!(
            png_bytes = png.len(),
            frame_bytes = self.frame.len(),
            render_us = self.scheduler.stats().last_render_us,
            "frame transmitted"
        );
        Ok(())
    }
}

/// Run a full interactive session on the controlling terminal.
///
/// Acquires raw mode and mouse tracking, sizes the canvas from the
/// terminal, and draws until the user quits. The terminal is restored on
/// every exit path.
pub fn run(config: &SketchConfig) -> Result<SessionSummary> {
    config.validate()?;

    let _guard = TerminalGuard::acquire(config.tracking)?;

    let (input_tx, input_rx) = bounded::<Vec<u8>>(64);
    let _reader = InputReader::spawn_stdin(input_tx)?;

    let mut stdout = io::stdout();
    let width = query_pixel_width(
        &mut stdout,
        &input_rx,
        config.size_query_timeout,
        config.fallback_width,
    );
    tracing::info!(
        width,
        height = config.canvas_height,
        max_fps = config.max_fps,
        "session started"
    );

    let mut session = Session::new(config, width, stdout)?;
    let summary = session.run(&input_rx)?;

    tracing::info!(
        exit = ?summary.exit,
        frames = summary.frames,
        bytes_written = summary.bytes_written,
        events = summary.events,
        "session ended"
    );
    Ok(summary)
}
