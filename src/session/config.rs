//! Session configuration.

use crate::canvas::Color;
use crate::error::{Result, SketchError};
use crate::stroke::Brush;
use crate::terminal::TrackingModes;
use std::time::Duration;

/// Configuration for a drawing session.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Canvas height in pixels. The width comes from the terminal.
    pub canvas_height: u32,
    /// Brush used for every mark.
    pub brush: Brush,
    /// Color of the one-pixel canvas outline.
    pub border_color: Color,
    /// Maximum frames per second (0 = render after every mutation).
    pub max_fps: u32,
    /// Canvas width used when the terminal does not report its size.
    pub fallback_width: u32,
    /// How long to wait for the window-size reply.
    pub size_query_timeout: Duration,
    /// Kitty image id reused by every frame.
    pub image_id: u32,
    /// Mouse tracking modes enabled for the session.
    pub tracking: TrackingModes,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_height: 600,
            brush: Brush::new(5, Color::WHITE),
            border_color: Color::WHITE,
            max_fps: 30,
            fallback_width: 800,
            size_query_timeout: Duration::from_millis(500),
            image_id: 1,
            tracking: TrackingModes::default(),
        }
    }
}

impl SketchConfig {
    /// Set the canvas height.
    #[must_use]
    pub const fn with_canvas_height(mut self, height: u32) -> Self {
        self.canvas_height = height;
        self
    }

    /// Set the brush.
    #[must_use]
    pub const fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the frame-rate ceiling.
    #[must_use]
    pub const fn with_max_fps(mut self, fps: u32) -> Self {
        self.max_fps = fps;
        self
    }

    /// Set the fallback canvas width.
    #[must_use]
    pub const fn with_fallback_width(mut self, width: u32) -> Self {
        self.fallback_width = width;
        self
    }

    /// Set the window-size query timeout.
    #[must_use]
    pub const fn with_size_query_timeout(mut self, timeout: Duration) -> Self {
        self.size_query_timeout = timeout;
        self
    }

    /// Check that the configuration can produce a canvas.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_height == 0 {
            return Err(SketchError::InvalidConfig("canvas height must be non-zero"));
        }
        if self.fallback_width == 0 {
            return Err(SketchError::InvalidConfig("fallback width must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.brush, Brush::new(5, Color::WHITE));
        assert_eq!(config.fallback_width, 800);
        assert_eq!(config.tracking, TrackingModes::all());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SketchConfig::default()
            .with_canvas_height(50)
            .with_brush(Brush::new(3, Color::BLUE))
            .with_max_fps(0)
            .with_size_query_timeout(Duration::from_millis(5));
        assert_eq!(config.canvas_height, 50);
        assert_eq!(config.brush.radius, 3);
        assert_eq!(config.max_fps, 0);
        assert_eq!(config.size_query_timeout, Duration::from_millis(5));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(matches!(
            SketchConfig::default().with_canvas_height(0).validate(),
            Err(SketchError::InvalidConfig(_))
        ));
        assert!(matches!(
            SketchConfig::default().with_fallback_width(0).validate(),
            Err(SketchError::InvalidConfig(_))
        ));
    }
}
