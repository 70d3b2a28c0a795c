use crate::paint::Color;

use super::{zero_fill_tail, PixelSurface};

/// Owned RGBA8 surface, row-major, straight alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Creates a transparent surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, c: Color) -> Self {
        Self { width, height, pixels: vec![c; width * height] }
    }

    /// Sets every pixel to `c`.
    pub fn fill(&mut self, c: Color) {
        self.pixels.fill(c);
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One full row, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    /// Raw `RGBA` bytes, `width * height * 4` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} surface",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl PixelSurface for ImageBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, c: Color) {
        let i = self.index(x, y);
        self.pixels[i] = c;
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    fn blend_pixel(&mut self, x: usize, y: usize, c: Color) {
        let i = self.index(x, y);
        self.pixels[i] = c.over(self.pixels[i]);
    }

    fn read_line(&self, y: usize, x: usize, out: &mut [Color]) {
        if x >= self.width || y >= self.height {
            out.fill(Color::TRANSPARENT);
            return;
        }

        let visible = (self.width - x).min(out.len());
        let start = y * self.width + x;
        out[..visible].copy_from_slice(&self.pixels[start..start + visible]);
        zero_fill_tail(out, visible);
    }

    fn clear(&mut self, c: Color) {
        self.fill(c);
    }
}
