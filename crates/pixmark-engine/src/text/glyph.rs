use super::TextError;

/// One rasterized code point at one pixel size.
///
/// Metrics follow the usual y-up font convention relative to the pen:
/// - `bitmap_left`: pen x to the first bitmap column
/// - `bitmap_top`: baseline up to the first bitmap row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Glyph {
    pub width: usize,
    pub height: usize,
    pub bitmap_left: i32,
    pub bitmap_top: i32,
    /// Horizontal advance reported by the font, in whole pixels.
    pub advance: i32,
    /// Row-major coverage mask, `width * height` bytes.
    pub coverage: Vec<u8>,
}

impl Glyph {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Produces coverage bitmaps for code points.
///
/// Implementations hold per-face mutable state (the active size); callers
/// serialize access through `&mut self`.
pub trait GlyphRasterizer {
    /// Changes the size used by subsequent [`rasterize`](Self::rasterize) calls.
    ///
    /// On error the previous size stays active.
    fn set_pixel_size(&mut self, px: u32) -> Result<(), TextError>;

    /// Rasterizes `ch` at the active size, or `None` when the font has no
    /// renderable glyph for it.
    fn rasterize(&mut self, ch: char) -> Option<Glyph>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for Box<R> {
    fn set_pixel_size(&mut self, px: u32) -> Result<(), TextError> {
        (**self).set_pixel_size(px)
    }

    fn rasterize(&mut self, ch: char) -> Option<Glyph> {
        (**self).rasterize(ch)
    }
}
