mod preview;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pixmark_engine::logging::{init_logging, LoggingConfig};
use pixmark_engine::paint::Color;
use pixmark_engine::surface::{ImageBuffer, PixelSurface, VirtualSurface};
use pixmark_engine::text::FontFace;

/// Fonts probed when `--font` is not given.
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Draws text onto an in-memory surface and prints it as ASCII art.
#[derive(Debug, Parser)]
#[command(name = "pixmark-studio", version)]
struct Cli {
    /// TrueType/OpenType font file.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Pixel size.
    #[arg(long, default_value_t = 12)]
    size: u32,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 16)]
    height: usize,

    /// Pen x.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Pen y (baseline of the first line); defaults to the pixel size.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Draw through a view at `X,Y,W,H` instead of the whole surface.
    #[arg(long, value_parser = parse_view)]
    view: Option<ViewRect>,

    /// Log filter, e.g. `pixmark_engine=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,

    /// Text to draw; `\n` starts a new line.
    #[arg(default_value = "Hi")]
    text: String,
}

#[derive(Debug, Copy, Clone)]
struct ViewRect {
    x: usize,
    y: usize,
    w: usize,
    h: usize,
}

fn parse_view(s: &str) -> Result<ViewRect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, w, h] => Ok(ViewRect { x, y, w, h }),
        _ => Err(format!("expected X,Y,W,H, got {s:?}")),
    }
}

fn locate_font(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match FALLBACK_FONTS.iter().map(PathBuf::from).find(|p| p.is_file()) {
        Some(path) => {
            log::warn!("no --font given, using {}", path.display());
            Ok(path)
        }
        None => bail!("no --font given and no fallback font found"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let font_path = locate_font(cli.font)?;
    let mut face = FontFace::open(&font_path, cli.size, Color::WHITE)
        .with_context(|| format!("loading {}", font_path.display()))?;

    let text = cli.text.replace("\\n", "\n");
    let pen_y = cli.y.unwrap_or(cli.size as i32);
    let mut image = ImageBuffer::new(cli.width, cli.height);

    match cli.view {
        Some(rect) => {
            let mut view = VirtualSurface::new(&mut image, rect.x, rect.y, rect.w, rect.h);
            face.draw(&mut view, &text, cli.x, pen_y);
        }
        None => face.draw(&mut image, &text, cli.x, pen_y),
    }

    let extent = face.measure(&text);
    log::info!(
        "drew {:?} at {}px: {}x{} px on a {}x{} surface",
        text,
        face.size(),
        extent.width,
        extent.height,
        image.width(),
        image.height()
    );

    for row in preview::ascii_rows(&image) {
        println!("|{row}|");
    }
    Ok(())
}
