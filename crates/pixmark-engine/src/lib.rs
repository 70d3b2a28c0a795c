//! Pixmark engine crate.
//!
//! Software raster compositing: a pixel surface contract, clipped views over
//! surfaces, and text drawing from fontdue-rasterized glyphs.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color` (straight RGBA8, "over" blending) |
//! | [`surface`] | `PixelSurface`, `ImageBuffer`, `VirtualSurface` |
//! | [`text`] | `FontFace`, `GlyphRasterizer`, `FontdueRasterizer`, `TextError` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```no_run
//! use pixmark_engine::paint::Color;
//! use pixmark_engine::surface::{ImageBuffer, PixelSurface, VirtualSurface};
//! use pixmark_engine::text::FontFace;
//!
//! let mut face = FontFace::open("DejaVuSans.ttf", 12, Color::BLACK)?;
//! let mut image = ImageBuffer::filled(128, 32, Color::WHITE);
//!
//! // Draw into the lower half only; glyphs straddling the view edge are clipped.
//! let mut view = VirtualSurface::new(&mut image, 0, 16, 128, 16);
//! face.draw(&mut view, "Hello\nworld", 2, 12);
//!
//! let first_row = image.get_line(0, 0, 128);
//! assert_eq!(first_row.len(), 128);
//! # Ok::<(), pixmark_engine::text::TextError>(())
//! ```

pub mod logging;
pub mod paint;
pub mod surface;
pub mod text;
