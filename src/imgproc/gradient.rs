use crate::imgproc::filter::convolve_separable;

const SIGN: [f32; 3] = [-1.0, 0.0, 1.0];
const SMOOTH: [f32; 3] = [1.0, 2.0, 1.0];

/// Sobel gradient magnitude of a grayscale buffer, as two separable passes
/// (`[-1,0,1]` sign, `[1,2,1]` smoothing) combined as `sqrt(Gx^2 + Gy^2)` and
/// clamped to a single byte per pixel.
#[must_use]
pub fn sobel_magnitude(gray: &[u8], width: usize, height: usize) -> Vec<u8> {
    let gx = convolve_separable(gray, width, height, &SMOOTH, &SIGN);
    let gy = convolve_separable(gray, width, height, &SIGN, &SMOOTH);

    gx.iter()
        .zip(gy.iter())
        .map(|(&x, &y)| (x * x + y * y).sqrt().clamp(0.0, 255.0) as u8)
        .collect()
}
