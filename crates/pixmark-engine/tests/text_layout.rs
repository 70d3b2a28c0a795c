//! End-to-end text drawing against the public API.

use pixmark_engine::paint::Color;
use pixmark_engine::surface::{ImageBuffer, PixelSurface, VirtualSurface};
use pixmark_engine::text::{FontFace, Glyph, GlyphRasterizer, TextError, GLYPH_GAP, LINE_GAP};

/// Fixed-metric glyphs for a handful of letters, independent of pixel size.
struct FixedGlyphs;

impl GlyphRasterizer for FixedGlyphs {
    fn set_pixel_size(&mut self, px: u32) -> Result<(), TextError> {
        pixmark_engine::text::validate_pixel_size(px)
    }

    fn rasterize(&mut self, ch: char) -> Option<Glyph> {
        let (width, height, bitmap_left) = match ch {
            'H' => (7, 9, 0),
            'i' => (2, 9, 1),
            'A' | 'B' => (5, 8, 0),
            _ => return None,
        };
        Some(Glyph {
            width,
            height,
            bitmap_left,
            bitmap_top: height as i32,
            advance: width as i32 + 1,
            coverage: vec![255; width * height],
        })
    }
}

fn face(size: u32, tint: Color) -> FontFace<FixedGlyphs> {
    FontFace::with_rasterizer(FixedGlyphs, size, tint).unwrap()
}

fn changed(before: &ImageBuffer, after: &ImageBuffer) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..after.height() {
        for x in 0..after.width() {
            if before.get_pixel(x, y) != after.get_pixel(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn hi_on_64x16_leaves_background_outside_two_glyph_regions() {
    let background = Color::rgb(240, 240, 240);
    let before = ImageBuffer::filled(64, 16, background);
    let mut surface = before.clone();

    face(12, Color::rgba(0, 0, 0, 255)).draw(&mut surface, "Hi", 0, 12);

    let diff = changed(&before, &surface);
    // H: pen 0, x 0..7; i: pen 0 + 7 + GLYPH_GAP = 9, bitmap_left 1 → x 10..12.
    let h_region = |&(x, y): &(usize, usize)| x < 7 && (3..12).contains(&y);
    let i_region = |&(x, y): &(usize, usize)| (10..12).contains(&x) && (3..12).contains(&y);

    assert_eq!(diff.iter().filter(|p| h_region(p)).count(), 7 * 9);
    assert_eq!(diff.iter().filter(|p| i_region(p)).count(), 2 * 9);
    assert_eq!(diff.len(), 7 * 9 + 2 * 9);
    assert_eq!(9, 7 + GLYPH_GAP as usize);

    for &(x, y) in &diff {
        assert_eq!(surface.get_pixel(x, y), Color::BLACK, "pixel ({x}, {y})");
    }
}

#[test]
fn newline_places_second_line_one_pitch_lower_at_origin_x() {
    let size = 12;
    let mut surface = ImageBuffer::new(64, 48);
    face(size, Color::WHITE).draw(&mut surface, "A\nB", 4, 10);

    let rows_painted_in_column = |x: usize| -> Vec<usize> {
        (0..surface.height()).filter(|&y| !surface.get_pixel(x, y).is_transparent()).collect()
    };

    let column = rows_painted_in_column(4);
    let a_top = 10 - 8;
    let b_top = a_top + size as usize + LINE_GAP as usize;
    let expected: Vec<usize> = (a_top..a_top + 8).chain(b_top..b_top + 8).collect();
    assert_eq!(column, expected);

    // Nothing to the right of the glyphs on the second line: x reset, not carried.
    assert!(surface.get_line(b_top, 9, 20).iter().all(|c| c.is_transparent()));
}

#[test]
fn unknown_code_points_leave_pen_in_place() {
    let mut with_unknown = ImageBuffer::new(32, 12);
    let mut without = ImageBuffer::new(32, 12);
    face(12, Color::BLACK).draw(&mut with_unknown, "H\u{1F600}zi", 0, 10);
    face(12, Color::BLACK).draw(&mut without, "Hi", 0, 10);
    assert_eq!(with_unknown, without);
}

#[test]
fn boxed_rasterizer_and_dyn_surface_compose() {
    let raster: Box<dyn GlyphRasterizer> = Box::new(FixedGlyphs);
    let mut f = FontFace::with_rasterizer(raster, 12, Color::BLACK).unwrap();

    let mut base = ImageBuffer::new(32, 32);
    let mut view = VirtualSurface::new(&mut base, 16, 16, 16, 16);
    let target: &mut dyn PixelSurface = &mut view;
    f.draw(target, "A", 0, 8);

    assert_eq!(base.get_pixel(16, 16), Color::BLACK);
    assert_eq!(base.get_pixel(20, 23), Color::BLACK);
    assert!(base.get_pixel(15, 16).is_transparent());
    assert!(base.get_pixel(21, 16).is_transparent());
}

#[test]
fn view_scan_lines_feed_a_consumer_without_bounds_checks() {
    let mut base = ImageBuffer::filled(10, 10, Color::WHITE);
    let view = VirtualSurface::new(&mut base, 8, 8, 5, 5);

    let mut rows = Vec::new();
    for y in 0..view.height() {
        rows.push(view.get_line(y, 0, view.width()));
    }

    assert!(rows.iter().all(|row| row.len() == 5));
    assert_eq!(rows[0][..2], [Color::WHITE, Color::WHITE]);
    assert_eq!(rows[0][2..], [Color::TRANSPARENT; 3]);
    assert!(rows[2..].iter().flatten().all(|c| *c == Color::TRANSPARENT));

    // Zero fill is transparent: compositing it changes nothing.
    let mut canvas = ImageBuffer::filled(5, 1, Color::rgb(1, 2, 3));
    for (x, &c) in rows[4].iter().enumerate() {
        canvas.blend_pixel(x, 0, c);
    }
    assert!(canvas.pixels().iter().all(|&c| c == Color::rgb(1, 2, 3)));
}

#[test]
fn oversized_font_size_is_rejected() {
    let mut f = face(12, Color::BLACK);
    let err = f.set_size(pixmark_engine::text::MAX_PIXEL_SIZE + 1).unwrap_err();
    assert!(matches!(err, TextError::FontSize { .. }));
    assert_eq!(f.size(), 12);
}
