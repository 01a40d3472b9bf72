//! Render Scheduler: frame pacing for canvas transmissions.
//!
//! Serializing and transmitting the whole canvas is far slower than
//! applying a stroke, so mutations are coalesced: any number of them
//! within one frame interval produce at most one render. The scheduler
//! never renders on its own; the session polls it.

use std::time::{Duration, Instant};

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total bytes written to terminal.
    pub bytes_written: u64,
    /// Average render time in microseconds.
    pub avg_render_us: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

impl FrameStats {
    /// Fold one rendered frame into the statistics.
    pub fn record(&mut self, bytes: usize, elapsed: Duration) {
        self.frames += 1;
        self.bytes_written += bytes as u64;
        self.last_render_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

        // Smoothed average
        if self.avg_render_us == 0 {
            self.avg_render_us = self.last_render_us;
        } else {
            self.avg_render_us = (self.avg_render_us * 15 + self.last_render_us) / 16;
        }
    }
}

/// Dirty flag plus frame clock.
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    /// Canvas changed since the last transmitted frame.
    dirty: bool,
    /// When the last frame was committed (`None` before the first).
    last_render: Option<Instant>,
    /// Minimum wall-clock time between frames.
    min_frame_interval: Duration,
    /// Frame statistics.
    stats: FrameStats,
}

impl RenderScheduler {
    /// Create a scheduler with an explicit frame interval.
    pub fn new(min_frame_interval: Duration) -> Self {
        Self {
            dirty: false,
            last_render: None,
            min_frame_interval,
            stats: FrameStats::default(),
        }
    }

    /// Create a scheduler from a maximum frame rate. `0` disables throttling.
    pub fn from_fps(max_fps: u32) -> Self {
        let interval = if max_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / max_fps
        };
        Self::new(interval)
    }

    /// Minimum time between frames.
    #[inline]
    pub const fn min_frame_interval(&self) -> Duration {
        self.min_frame_interval
    }

    /// Whether a frame is owed.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Note that the canvas changed.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True iff dirty and at least one frame interval has passed since the
    /// last commit.
    pub fn should_render(&self, now: Instant) -> bool {
        self.dirty && self.elapsed_since_render(now) >= self.min_frame_interval
    }

    /// How long until a pending frame becomes due.
    ///
    /// `None` when nothing is pending; `Some(Duration::ZERO)` when a frame
    /// is due now.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.dirty {
            return None;
        }
        Some(
            self.min_frame_interval
                .saturating_sub(self.elapsed_since_render(now)),
        )
    }

    /// Record that a frame reflecting every mutation so far went out at `now`.
    pub fn commit_render(&mut self, now: Instant) {
        self.dirty = false;
        self.last_render = Some(now);
    }

    /// Fold a rendered frame's cost into the statistics.
    pub fn record_frame(&mut self, bytes: usize, elapsed: Duration) {
        self.stats.record(bytes, elapsed);
    }

    /// Frame statistics so far.
    pub const fn stats(&self) -> &FrameStats {
        &self.stats
    }

    fn elapsed_since_render(&self, now: Instant) -> Duration {
        self.last_render
            .map_or(Duration::MAX, |last| now.saturating_duration_since(last))
    }
}
