#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Convolve a single-channel byte buffer with a separable kernel pair,
/// vertical pass first then horizontal, replicating edge pixels at the
/// border. Returns a float buffer the same shape as the input.
#[must_use]
pub fn convolve_separable(
    src: &[u8],
    width: usize,
    height: usize,
    kernel_v: &[f32],
    kernel_h: &[f32],
) -> Vec<f32> {
    let temp = convolve_pass(src, width, height, kernel_v, Axis::Vertical);
    convolve_pass_f32(&temp, width, height, kernel_h, Axis::Horizontal)
}

enum Axis {
    Vertical,
    Horizontal,
}

fn clamp_index(i: isize, len: usize) -> usize {
    i.max(0).min(len as isize - 1) as usize
}

fn convolve_pass(src: &[u8], width: usize, height: usize, kernel: &[f32], axis: Axis) -> Vec<f32> {
    let half = (kernel.len() / 2) as isize;
    let mut out = vec![0f32; width * height];

    #[cfg(feature = "rayon")]
    {
        rayon::scope(|_s| {
            out.par_chunks_mut(width).enumerate().for_each(|(row, out_row)| {
                run_row(src, width, height, kernel, half, &axis, row, out_row);
            });
        });
    }

    #[cfg(not(feature = "rayon"))]
    {
        for (row, out_row) in out.chunks_mut(width).enumerate() {
            run_row(src, width, height, kernel, half, &axis, row, out_row);
        }
    }

    out
}

fn convolve_pass_f32(src: &[f32], width: usize, height: usize, kernel: &[f32], axis: Axis) -> Vec<f32> {
    let half = (kernel.len() / 2) as isize;
    let mut out = vec![0f32; width * height];

    #[cfg(feature = "rayon")]
    {
        rayon::scope(|_s| {
            out.par_chunks_mut(width).enumerate().for_each(|(row, out_row)| {
                run_row_f32(src, width, height, kernel, half, &axis, row, out_row);
            });
        });
    }

    #[cfg(not(feature = "rayon"))]
    {
        for (row, out_row) in out.chunks_mut(width).enumerate() {
            run_row_f32(src, width, height, kernel, half, &axis, row, out_row);
        }
    }

    out
}

fn run_row(
    src: &[u8],
    width: usize,
    height: usize,
    kernel: &[f32],
    half: isize,
    axis: &Axis,
    row: usize,
    out_row: &mut [f32],
) {
    for col in 0..width {
        let mut sum = 0f32;
        for (k, &weight) in kernel.iter().enumerate() {
            let offset = k as isize - half;
            let (r, c) = match axis {
                Axis::Vertical => (clamp_index(row as isize + offset, height), col),
                Axis::Horizontal => (row, clamp_index(col as isize + offset, width)),
            };
            sum += f32::from(src[r * width + c]) * weight;
        }
        out_row[col] = sum;
    }
}

fn run_row_f32(
    src: &[f32],
    width: usize,
    height: usize,
    kernel: &[f32],
    half: isize,
    axis: &Axis,
    row: usize,
    out_row: &mut [f32],
) {
    for col in 0..width {
        let mut sum = 0f32;
        for (k, &weight) in kernel.iter().enumerate() {
            let offset = k as isize - half;
            let (r, c) = match axis {
                Axis::Vertical => (clamp_index(row as isize + offset, height), col),
                Axis::Horizontal => (row, clamp_index(col as isize + offset, width)),
            };
            sum += src[r * width + c] * weight;
        }
        out_row[col] = sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_is_unchanged_by_averaging_kernel() {
        let src = vec![100u8; 25];
        let kernel = vec![1.0 / 3.0; 3];
        let out = convolve_separable(&src, 5, 5, &kernel, &kernel);
        for v in out {
            assert!((v - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sign_kernel_on_ramp_is_constant_interior() {
        // Horizontal ramp: column value == column index * 10.
        let width = 6;
        let height = 1;
        let src: Vec<u8> = (0..width).map(|c| (c * 10) as u8).collect();
        let identity = vec![1.0f32];
        let sign = vec![-1.0f32, 0.0, 1.0];
        let out = convolve_separable(&src, width, height, &identity, &sign);
        // interior columns should see a constant forward difference of 20
        assert!((out[2] - 20.0).abs() < 1e-3);
        assert!((out[3] - 20.0).abs() < 1e-3);
    }
}
