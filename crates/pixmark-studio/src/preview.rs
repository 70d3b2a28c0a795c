use pixmark_engine::surface::PixelSurface;

/// Darkest last; indexed by alpha.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Renders each row of `surface` as one line of ASCII, one character per
/// pixel, chosen by alpha. Rows are read with the scan-line contract, so
/// surfaces whose nominal extent exceeds their storage print blanks.
pub fn ascii_rows(surface: &dyn PixelSurface) -> Vec<String> {
    let width = surface.width();
    (0..surface.height())
        .map(|y| {
            surface
                .get_line(y, 0, width)
                .iter()
                .map(|c| RAMP[c.a as usize * (RAMP.len() - 1) / 255] as char)
                .collect()
        })
        .collect()
}
