//! Text drawing onto pixel surfaces.
//!
//! [`FontFace`] walks a string code point by code point, asks its
//! [`GlyphRasterizer`] for a coverage bitmap, and blends the tinted mask onto
//! any [`PixelSurface`](crate::surface::PixelSurface). Layout is deliberately
//! simple: fixed gaps, `'\n'` line breaks, no shaping or kerning.

mod error;
mod font_face;
mod glyph;
mod rasterizer;

pub use error::{FontFileErrorKind, TextError};
pub use font_face::{FontFace, TextExtent};
pub use glyph::{Glyph, GlyphRasterizer};
pub use rasterizer::FontdueRasterizer;

/// Extra vertical space between lines, added to the pixel size.
pub const LINE_GAP: i32 = 2;

/// Horizontal space between one glyph bitmap and the next.
pub const GLYPH_GAP: i32 = 2;

/// Largest pixel size the built-in rasterizer accepts.
pub const MAX_PIXEL_SIZE: u32 = 1024;

/// Rejects sizes that cannot produce a usable raster.
pub fn validate_pixel_size(px: u32) -> Result<(), TextError> {
    if px == 0 || px > MAX_PIXEL_SIZE {
        return Err(TextError::FontSize { size: px });
    }
    Ok(())
}
