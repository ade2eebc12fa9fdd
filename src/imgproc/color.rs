/// Fixed-point luminance weights, scaled by 2^16, matching the
/// 0.299/0.587/0.114 ITU-R BT.601 weighted sum to within rounding.
const WEIGHT_R: u32 = 13933;
const WEIGHT_G: u32 = 46871;
const WEIGHT_B: u32 = 4732;
const WEIGHT_SHIFT: u32 = 16;

/// Convert an RGBA buffer to single-channel grayscale using the fixed-point
/// weighted sum. Alpha is ignored. This is the hot-loop path used by the
/// detector; see [`grayscale_float`] for the floating-point formula this is
/// numerically equivalent to.
#[must_use]
pub fn grayscale(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    for chunk in pixels.chunks_exact(4).take(width * height) {
        let (r, g, b) = (u32::from(chunk[0]), u32::from(chunk[1]), u32::from(chunk[2]));
        let sum = r * WEIGHT_R + g * WEIGHT_G + b * WEIGHT_B;
        out.push((sum >> WEIGHT_SHIFT) as u8);
    }
    out
}

/// The floating-point grayscale formula `0.299*R + 0.587*G + 0.114*B`,
/// truncated toward zero. Not a second code path callers choose between,
/// kept only so the fixed-point weights above can be tested for equivalence.
#[must_use]
pub fn grayscale_float(r: u8, g: u8, b: u8) -> u8 {
    let value = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    value.floor() as u8
}
