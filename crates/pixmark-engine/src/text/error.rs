use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Why a font file could not be loaded.
#[derive(Debug, Error)]
pub enum FontFileErrorKind {
    #[error("could not open file ({0})")]
    Open(#[source] io::Error),

    #[error("could not open file - unknown file format ({0})")]
    UnknownFormat(String),
}

/// Errors surfaced by [`FontFace`](super::FontFace) construction and configuration.
///
/// Missing glyphs are not errors; drawing skips them.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to initialize the glyph rasterizer: {0}")]
    EngineInit(String),

    #[error("{kind}: {origin}")]
    FontFile {
        /// Path of the font file, or a label for in-memory fonts.
        origin: String,
        #[source]
        kind: FontFileErrorKind,
    },

    #[error("failed to set font pixel size to {size}")]
    FontSize { size: u32 },

    #[error("text is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),
}

impl TextError {
    pub(crate) fn font_file(origin: impl Into<String>, kind: FontFileErrorKind) -> Self {
        Self::FontFile { origin: origin.into(), kind }
    }
}
