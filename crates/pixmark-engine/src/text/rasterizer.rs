use std::path::Path;

use fontdue::{Font, FontSettings};

use super::{validate_pixel_size, FontFileErrorKind, Glyph, GlyphRasterizer, TextError};

/// [`GlyphRasterizer`] backed by a parsed `fontdue::Font`.
///
/// Accepts TrueType and OpenType outlines. Code points that map to the
/// `.notdef` glyph (index 0) count as unavailable.
pub struct FontdueRasterizer {
    font: Font,
    px: f32,
}

impl FontdueRasterizer {
    /// Reads and parses the font file at `path`.
    pub fn open(path: &Path) -> Result<Self, TextError> {
        let origin = path.display().to_string();
        let bytes = std::fs::read(path)
            .map_err(|e| TextError::font_file(&origin, FontFileErrorKind::Open(e)))?;
        Self::parse(&bytes, &origin)
    }

    /// Parses an in-memory font (e.g. `include_bytes!`).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        Self::parse(bytes, "<memory>")
    }

    fn parse(bytes: &[u8], origin: &str) -> Result<Self, TextError> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            TextError::font_file(origin, FontFileErrorKind::UnknownFormat(reason.to_string()))
        })?;

        log::debug!("parsed font {origin} ({} glyphs)", font.glyph_count());
        Ok(Self { font, px: 0.0 })
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn set_pixel_size(&mut self, px: u32) -> Result<(), TextError> {
        validate_pixel_size(px)?;
        self.px = px as f32;
        Ok(())
    }

    fn rasterize(&mut self, ch: char) -> Option<Glyph> {
        if self.px <= 0.0 {
            return None;
        }

        let index = self.font.lookup_glyph_index(ch);
        if index == 0 {
            return None;
        }

        let (metrics, coverage) = self.font.rasterize_indexed(index, self.px);
        Some(Glyph {
            width: metrics.width,
            height: metrics.height,
            bitmap_left: metrics.xmin,
            bitmap_top: metrics.ymin + metrics.height as i32,
            advance: metrics.advance_width.ceil() as i32,
            coverage,
        })
    }
}
