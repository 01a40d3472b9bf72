//! Canvas: the persistent raster the user draws on.
//!
//! Pixels live in a contiguous row-major RGBA buffer (`image::RgbaImage`).
//! Every paint primitive clips silently to `[0, width) × [0, height)`;
//! writing off the edge is never an error.

use super::color::Color;
use super::point::Point;
use crate::error::{Result, SketchError};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// The drawing surface.
///
/// Width and height are fixed at construction. The buffer starts fully
/// transparent apart from a one-pixel opaque border along the outer edge.
#[derive(Clone)]
pub struct Canvas {
    /// Row-major RGBA pixel storage.
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas and draw its border.
    ///
    /// Fails with [`SketchError::InvalidConfig`] if either dimension is 0.
    pub fn new(width: u32, height: u32, border: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidConfig("canvas dimensions must be non-zero"));
        }
        let mut canvas = Self {
            image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into()),
        };
        canvas.draw_border(border);
        Ok(canvas)
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Check if a point lies on the canvas.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        u32::try_from(point.x).is_ok_and(|x| x < self.width())
            && u32::try_from(point.y).is_ok_and(|y| y < self.height())
    }

    /// Get the color at a point, or `None` if it is off the canvas.
    pub fn pixel(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        let pixel = *self.image.get_pixel(point.x as u32, point.y as u32);
        Some(pixel.into())
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Paint a filled disc of `radius` centered at `center`.
    ///
    /// A pixel is covered when its distance from the center is at most
    /// `radius`, so the disc spans `2 * radius + 1` pixels across.
    pub fn stamp(&mut self, center: Point, radius: u32, color: Color) {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let Some((x0, x1)) = clip_span(cx - r, cx + r, self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(cy - r, cy + r, self.height()) else {
            return;
        };

        let r_sq = r * r;
        let pixel = color.into();
        for y in y0..=y1 {
            let dy = i64::from(y) - cy;
            for x in x0..=x1 {
                let dx = i64::from(x) - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Paint a capsule of width `2 * radius` from `from` to `to`, then
    /// stamp a disc at `to` so every segment ends in a round cap.
    pub fn stroke(&mut self, from: Point, to: Point, radius: u32, color: Color) {
        let (ax, ay) = (f64::from(from.x), f64::from(from.y));
        let (dx, dy) = (f64::from(to.x) - ax, f64::from(to.y) - ay);
        let len_sq = dx.mul_add(dx, dy * dy);

        let r = i64::from(radius);
        let x_span = clip_span(
            i64::from(from.x.min(to.x)) - r,
            i64::from(from.x.max(to.x)) + r,
            self.width(),
        );
        let y_span = clip_span(
            i64::from(from.y.min(to.y)) - r,
            i64::from(from.y.max(to.y)) + r,
            self.height(),
        );

        if let (Some((x0, x1)), Some((y0, y1))) = (x_span, y_span) {
            let r_sq = f64::from(radius) * f64::from(radius);
            let pixel = color.into();
            for y in y0..=y1 {
                let py = f64::from(y) - ay;
                for x in x0..=x1 {
                    let px = f64::from(x) - ax;
                    // Project onto the segment, clamped to its endpoints.
                    let t = if len_sq == 0.0 {
                        0.0
                    } else {
                        (px.mul_add(dx, py * dy) / len_sq).clamp(0.0, 1.0)
                    };
                    let (ex, ey) = (t.mul_add(-dx, px), t.mul_add(-dy, py));
                    if ex.mul_add(ex, ey * ey) <= r_sq {
                        self.image.put_pixel(x, y, pixel);
                    }
                }
            }
        }

        self.stamp(to, radius, color);
    }

    /// Encode the canvas as a PNG payload.
    ///
    /// Read-only: the canvas is left untouched.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut payload = Vec::with_capacity(self.as_raw().len() / 8);
        PngEncoder::new(&mut payload).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(payload)
    }

    /// Draw the one-pixel outline along the outer edge.
    fn draw_border(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        let pixel = color.into();
        for x in 0..w {
            self.image.put_pixel(x, 0, pixel);
            self.image.put_pixel(x, h - 1, pixel);
        }
        for y in 0..h {
            self.image.put_pixel(0, y, pixel);
            self.image.put_pixel(w - 1, y, pixel);
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Clamp the inclusive span `[lo, hi]` to `[0, extent)`.
///
/// Returns `None` when nothing of the span is on the canvas.
fn clip_span(lo: i64, hi: i64, extent: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(extent) - 1);
    if lo > hi {
        return None;
    }
    Some((u32::try_from(lo).ok()?, u32::try_from(hi).ok()?))
}
