//! Pixel surfaces.
//!
//! Canonical space:
//! - integer pixels, origin top-left
//! - +X right, +Y down
//!
//! [`PixelSurface`] is the compositing contract. Concrete storage lives in
//! [`ImageBuffer`]; [`VirtualSurface`] is a translated, zero-copy view over
//! any other surface.

mod buffer;
mod view;

pub use buffer::ImageBuffer;
pub use view::VirtualSurface;

use crate::paint::Color;

/// Capability set every drawable surface implements.
///
/// Bounds contract:
/// - `set_pixel`, `get_pixel` and `blend_pixel` are unchecked. Callers must
///   keep `(x, y)` inside `[0, width) × [0, height)`; violating that is a
///   caller bug and may panic or touch a neighbouring row.
/// - `safe_blend_pixel` and the scan-line reads are total: out-of-bounds
///   input is a no-op / zero-fill.
///
/// The trait is object safe, so `&mut dyn PixelSurface` works wherever a
/// generic surface does.
pub trait PixelSurface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Overwrites the pixel unconditionally.
    fn set_pixel(&mut self, x: usize, y: usize, c: Color);

    fn get_pixel(&self, x: usize, y: usize) -> Color;

    /// Reads `out.len()` consecutive pixels starting at `(x, y)`.
    ///
    /// Implementations must write every entry of `out`: the in-bounds prefix
    /// from storage, transparent black for the rest.
    fn read_line(&self, y: usize, x: usize, out: &mut [Color]);

    /// Composites `c` over the current pixel.
    #[inline]
    fn blend_pixel(&mut self, x: usize, y: usize, c: Color) {
        let dst = self.get_pixel(x, y);
        self.set_pixel(x, y, c.over(dst));
    }

    /// Like [`blend_pixel`](Self::blend_pixel) but ignores coordinates outside
    /// the surface.
    #[inline]
    fn safe_blend_pixel(&mut self, x: usize, y: usize, c: Color) {
        if self.contains(x, y) {
            self.blend_pixel(x, y, c);
        }
    }

    /// Returns exactly `count` pixels starting at `(x, y)`, zero-filled past
    /// the surface edge.
    fn get_line(&self, y: usize, x: usize, count: usize) -> Vec<Color> {
        let mut line = vec![Color::TRANSPARENT; count];
        self.read_line(y, x, &mut line);
        line
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Blends `c` over the part of the rectangle that lies on the surface.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, c: Color) {
        let x1 = x.saturating_add(w).min(self.width());
        let y1 = y.saturating_add(h).min(self.height());
        for py in y..y1 {
            for px in x..x1 {
                self.safe_blend_pixel(px, py, c);
            }
        }
    }

    /// Overwrites every pixel with `c`.
    fn clear(&mut self, c: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, c);
            }
        }
    }
}

/// Zero-fills `out` past `visible` entries. Shared by `read_line` implementations.
#[inline]
pub(crate) fn zero_fill_tail(out: &mut [Color], visible: usize) {
    if let Some(tail) = out.get_mut(visible..) {
        tail.fill(Color::TRANSPARENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ImageBuffer {
        ImageBuffer::filled(4, 3, Color::BLACK)
    }

    // ── provided methods ──────────────────────────────────────────────────

    #[test]
    fn safe_blend_ignores_out_of_bounds() {
        let mut s = grid();
        let before = s.clone();
        s.safe_blend_pixel(4, 0, Color::WHITE);
        s.safe_blend_pixel(0, 3, Color::WHITE);
        s.safe_blend_pixel(usize::MAX, usize::MAX, Color::WHITE);
        assert_eq!(s, before);
    }

    #[test]
    fn safe_blend_in_bounds_blends() {
        let mut s = grid();
        s.safe_blend_pixel(3, 2, Color::WHITE);
        assert_eq!(s.get_pixel(3, 2), Color::WHITE);
    }

    #[test]
    fn blend_pixel_with_transparent_source_is_noop() {
        let mut s = grid();
        s.blend_pixel(1, 1, Color::rgba(255, 0, 0, 0));
        assert_eq!(s.get_pixel(1, 1), Color::BLACK);
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let mut s = grid();
        s.fill_rect(2, 1, 10, 10, Color::WHITE);
        assert_eq!(s.get_pixel(1, 1), Color::BLACK);
        assert_eq!(s.get_pixel(2, 0), Color::BLACK);
        assert_eq!(s.get_pixel(2, 1), Color::WHITE);
        assert_eq!(s.get_pixel(3, 2), Color::WHITE);
    }

    #[test]
    fn clear_overwrites_everything() {
        let mut s = grid();
        s.clear(Color::TRANSPARENT);
        assert!(s.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn works_through_trait_object() {
        let mut s = grid();
        let dyn_surface: &mut dyn PixelSurface = &mut s;
        dyn_surface.safe_blend_pixel(0, 0, Color::WHITE);
        assert_eq!(dyn_surface.get_line(0, 0, 2), vec![Color::WHITE, Color::BLACK]);
    }

    // ── get_line length invariant ─────────────────────────────────────────

    #[test]
    fn get_line_always_returns_count_entries() {
        let s = grid();
        for (y, x, count) in [(0, 0, 4), (0, 2, 5), (1, 3, 9), (3, 0, 4), (0, 4, 3), (0, 0, 0), (9, 9, 7)] {
            assert_eq!(s.get_line(y, x, count).len(), count, "y={y} x={x} count={count}");
        }
    }
}
