use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, one byte per channel.
///
/// Invariant:
/// - `rgb` is never multiplied by `a` at rest; blending always produces
///   straight-alpha results.
///
/// `Color::default()` is transparent black, which is also what out-of-bounds
/// scan-line reads produce.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Unpacks `0xRRGGBBAA`.
    #[inline]
    pub const fn from_hex_rgba(hex: u32) -> Self {
        Self::rgba((hex >> 24) as u8, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composites `self` over `dst` ("source over").
    ///
    /// Per channel: `src * src.a + dst * dst.a * (1 - src.a)`, divided by the
    /// resulting alpha `src.a + dst.a * (1 - src.a)`. For an opaque `dst` this
    /// reduces to `src * src.a + dst * (1 - src.a)`.
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        // Weights in 1/65025 units so the division happens once per channel.
        let src_w = self.a as u32 * 255;
        let dst_w = dst.a as u32 * (255 - self.a as u32);
        let out_w = src_w + dst_w;

        let channel = |s: u8, d: u8| -> u8 {
            ((s as u32 * src_w + d as u32 * dst_w + out_w / 2) / out_w) as u8
        };

        Color {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: ((out_w + 127) / 255) as u8,
        }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
