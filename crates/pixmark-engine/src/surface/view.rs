use crate::paint::Color;

use super::{zero_fill_tail, PixelSurface};

/// Translated view over a borrowed base surface.
///
/// View coordinate `(x, y)` maps to base coordinate `(x + offset_x, y + offset_y)`.
/// The view owns no pixels; the borrow ties its lifetime to the base. Its
/// nominal `width`/`height` may extend past the base, in which case reads
/// past the base edge zero-fill and safe blends are dropped.
///
/// Views nest: the base may itself be a `VirtualSurface`.
pub struct VirtualSurface<'a, S: PixelSurface + ?Sized> {
    base: &'a mut S,
    offset_x: usize,
    offset_y: usize,
    width: usize,
    height: usize,
}

impl<'a, S: PixelSurface + ?Sized> VirtualSurface<'a, S> {
    pub fn new(base: &'a mut S, offset_x: usize, offset_y: usize, width: usize, height: usize) -> Self {
        Self { base, offset_x, offset_y, width, height }
    }

    #[inline]
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_y)
    }

    /// Base coordinate for a view coordinate. Saturates instead of wrapping, so
    /// huge inputs land outside the base.
    #[inline]
    fn translate(&self, x: usize, y: usize) -> (usize, usize) {
        (x.saturating_add(self.offset_x), y.saturating_add(self.offset_y))
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for VirtualSurface<'_, S> {
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
        let (bx, by) = self.translate(x, y);
        self.base.set_pixel(bx, by, c);
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Color {
        let (bx, by) = self.translate(x, y);
        self.base.get_pixel(bx, by)
    }

    #[inline]
    fn blend_pixel(&mut self, x: usize, y: usize, c: Color) {
        let (bx, by) = self.translate(x, y);
        self.base.blend_pixel(bx, by, c);
    }

    /// Drops the write unless `(x, y)` is inside both the view and the base.
    #[inline]
    fn safe_blend_pixel(&mut self, x: usize, y: usize, c: Color) {
        if !self.contains(x, y) {
            return;
        }
        let (bx, by) = self.translate(x, y);
        self.base.safe_blend_pixel(bx, by, c);
    }

    fn read_line(&self, y: usize, x: usize, out: &mut [Color]) {
        let (ox, oy) = self.translate(x, y);
        let (base_w, base_h) = (self.base.width(), self.base.height());

        if ox >= base_w || oy >= base_h {
            out.fill(Color::TRANSPARENT);
            return;
        }

        let visible = (base_w - ox).min(out.len());
        if visible == out.len() {
            self.base.read_line(oy, ox, out);
        } else {
            self.base.read_line(oy, ox, &mut out[..visible]);
            zero_fill_tail(out, visible);
        }
    }

    fn clear(&mut self, c: Color) {
        let (base_w, base_h) = (self.base.width(), self.base.height());
        for y in 0..self.height {
            for x in 0..self.width {
                let (bx, by) = self.translate(x, y);
                if bx < base_w && by < base_h {
                    self.base.set_pixel(bx, by, c);
                }
            }
        }
    }
}
