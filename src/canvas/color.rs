//! Color: RGBA paint used by the brush and the canvas border.

/// True-color RGBA representation.
///
/// Four bytes per pixel, matching the layout of the canvas raster so a
/// color converts to an [`image::Rgba`] sample without reshuffling.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Color {
    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Fully transparent (0, 0, 0, 0). The canvas background.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white (255, 255, 255, 255)
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black (0, 0, 0, 255)
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque blue (0, 0, 255, 255)
    pub const BLUE: Self = Self::opaque(0, 0, 255);
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for image::Rgba<u8> {
    #[inline]
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b, color.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    #[inline]
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}
