use std::path::Path;

use crate::paint::Color;
use crate::surface::PixelSurface;

use super::{FontdueRasterizer, Glyph, GlyphRasterizer, TextError, GLYPH_GAP, LINE_GAP};

/// Size of a laid-out string in pixels, as [`FontFace::measure`] reports it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// One opened font at one pixel size, plus the tint used for drawing.
///
/// Size and tint only affect glyphs rasterized after they change. Pen
/// position is local to each [`draw`](Self::draw) call, so consecutive draws
/// share nothing but configuration.
///
/// The rasterizer's state is mutated by every draw; wrap a shared face in a
/// `Mutex` rather than cloning handles to it.
pub struct FontFace<R = FontdueRasterizer> {
    rasterizer: R,
    size: u32,
    tint: Color,
}

impl FontFace<FontdueRasterizer> {
    /// Loads the font at `path` and applies `size`.
    ///
    /// Fails with [`TextError::FontFile`] when the file cannot be read or
    /// parsed and [`TextError::FontSize`] when the size is rejected.
    pub fn open(path: impl AsRef<Path>, size: u32, tint: Color) -> Result<Self, TextError> {
        let path = path.as_ref();
        let face = Self::with_rasterizer(FontdueRasterizer::open(path)?, size, tint)?;
        log::debug!("opened font face {} at {size}px", path.display());
        Ok(face)
    }

    /// Like [`open`](Self::open) for fonts already in memory.
    pub fn from_bytes(bytes: &[u8], size: u32, tint: Color) -> Result<Self, TextError> {
        Self::with_rasterizer(FontdueRasterizer::from_bytes(bytes)?, size, tint)
    }
}

impl<R: GlyphRasterizer> FontFace<R> {
    /// Wraps an already-initialized rasterizer and applies `size`.
    pub fn with_rasterizer(mut rasterizer: R, size: u32, tint: Color) -> Result<Self, TextError> {
        rasterizer.set_pixel_size(size)?;
        Ok(Self { rasterizer, size, tint })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Changes the pixel size for subsequent draws. On error the previous
    /// size stays active.
    pub fn set_size(&mut self, size: u32) -> Result<(), TextError> {
        self.rasterizer.set_pixel_size(size)?;
        if size != self.size {
            log::debug!("font size {} -> {size}px", self.size);
        }
        self.size = size;
        Ok(())
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    /// Draws `text` with its first baseline at `(pen_x, pen_y)`.
    ///
    /// Each glyph's coverage replaces the tint's alpha, blended with
    /// [`PixelSurface::safe_blend_pixel`]; parts of a glyph outside the
    /// surface (including negative coordinates) are dropped. `'\n'` returns
    /// the pen to `pen_x` one line lower. Code points without a glyph are
    /// skipped and do not move the pen.
    pub fn draw<S>(&mut self, surface: &mut S, text: &str, pen_x: i32, pen_y: i32)
    where
        S: PixelSurface + ?Sized,
    {
        let tint = self.tint;
        self.walk(text, pen_x, pen_y, |glyph, left, top| {
            blend_glyph(&mut *surface, glyph, left, top, tint);
        });
    }

    /// Decodes `bytes` as UTF-8 and draws the result. Nothing is drawn when
    /// decoding fails.
    pub fn draw_bytes<S>(&mut self, surface: &mut S, bytes: &[u8], pen_x: i32, pen_y: i32) -> Result<(), TextError>
    where
        S: PixelSurface + ?Sized,
    {
        let text = std::str::from_utf8(bytes)?;
        self.draw(surface, text, pen_x, pen_y);
        Ok(())
    }

    /// Size `text` would occupy if drawn, without touching a surface.
    ///
    /// Width spans from the pen to the right edge of the widest line's last
    /// bitmap; height is one line pitch per line minus the trailing gap.
    #[must_use]
    pub fn measure(&mut self, text: &str) -> TextExtent {
        let mut width = 0i64;
        let lines = self.walk(text, 0, 0, |glyph, left, _| {
            width = width.max(left as i64 - glyph.bitmap_left as i64 + glyph.width as i64);
        });

        let pitch = self.size as i64 + LINE_GAP as i64;
        let height = lines as i64 * pitch - LINE_GAP as i64;
        TextExtent {
            width: width.clamp(0, u32::MAX as i64) as u32,
            height: height.clamp(0, u32::MAX as i64) as u32,
        }
    }

    /// Runs the pen over `text`, calling `place(glyph, left, top)` with the
    /// bitmap's top-left corner for every rasterized glyph. Returns the number
    /// of lines.
    fn walk<F>(&mut self, text: &str, pen_x: i32, pen_y: i32, mut place: F) -> usize
    where
        F: FnMut(&Glyph, i32, i32),
    {
        let line_pitch = i32::try_from(self.size).unwrap_or(i32::MAX).saturating_add(LINE_GAP);
        let mut cursor_x = pen_x;
        let mut cursor_y = pen_y;
        let mut lines = 1;

        for ch in text.chars() {
            if ch == '\n' {
                cursor_x = pen_x;
                cursor_y = cursor_y.saturating_add(line_pitch);
                lines += 1;
                continue;
            }

            let Some(glyph) = self.rasterizer.rasterize(ch) else {
                log::trace!("no glyph for U+{:04X} at {}px, skipping", ch as u32, self.size);
                continue;
            };

            place(
                &glyph,
                cursor_x.saturating_add(glyph.bitmap_left),
                cursor_y.saturating_sub(glyph.bitmap_top),
            );

            let glyph_width = i32::try_from(glyph.width).unwrap_or(i32::MAX);
            cursor_x = cursor_x.saturating_add(glyph_width).saturating_add(GLYPH_GAP);
        }

        lines
    }
}

/// Blends a tinted coverage mask with its top-left corner at `(left, top)`.
fn blend_glyph<S>(surface: &mut S, glyph: &Glyph, left: i32, top: i32, tint: Color)
where
    S: PixelSurface + ?Sized,
{
    if glyph.is_empty() {
        return;
    }

    let surface_w = surface.width() as i64;
    let surface_h = surface.height() as i64;

    let rows = glyph.coverage.chunks(glyph.width).take(glyph.height);
    for (row, mask) in rows.enumerate() {
        let y = top as i64 + row as i64;
        if y < 0 {
            continue;
        }
        if y >= surface_h {
            break;
        }

        for (col, &coverage) in mask.iter().enumerate() {
            let x = left as i64 + col as i64;
            if x < 0 || coverage == 0 {
                continue;
            }
            if x >= surface_w {
                break;
            }
            surface.safe_blend_pixel(x as usize, y as usize, tint.with_alpha(coverage));
        }
    }
}
