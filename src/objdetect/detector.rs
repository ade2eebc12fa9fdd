use crate::core::types::{Detection, Rect};
use crate::error::{Error, Result};
use crate::imgproc::{color, gradient, integral};
use crate::objdetect::cascade::Cascade;
use crate::objdetect::evaluator::evaluate_window;
use crate::objdetect::merge::merge_rectangles;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The configuration surface of a single [`detect`] call. There is no
/// external config file, environment variable, or persisted state: callers
/// construct a value (or use [`Default`]) and pass it in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    pub initial_scale: f64,
    pub scale_factor: f64,
    pub step_size: f64,
    /// Minimum Sobel edge density (in `[0, 1]`) a window must have to be
    /// evaluated by the cascade. `0.0` disables edge-density pruning.
    pub edges_density: f64,
    pub regions_overlap: f64,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            scale_factor: 1.25,
            step_size: 1.5,
            edges_density: 0.2,
            regions_overlap: 0.5,
        }
    }
}

impl DetectionParams {
    fn validate(&self) -> Result<()> {
        if !(self.scale_factor > 1.0) {
            return Err(Error::InvalidParameter("scale_factor must be greater than 1".to_string()));
        }
        if !(self.step_size > 0.0) {
            return Err(Error::InvalidParameter("step_size must be positive".to_string()));
        }
        if !(self.initial_scale > 0.0) {
            return Err(Error::InvalidParameter("initial_scale must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.edges_density) {
            return Err(Error::InvalidParameter("edges_density must be in [0, 1]".to_string()));
        }
        if !(self.regions_overlap > 0.0 && self.regions_overlap <= 1.0) {
            return Err(Error::InvalidParameter("regions_overlap must be in (0, 1]".to_string()));
        }
        Ok(())
    }
}

/// Scan `pixels` at every scale and position, evaluate `cascade` at each
/// window, and return the merged detections.
///
/// `pixels` is a read-only RGBA byte slice of length `4*width*height`; alpha
/// is ignored. Scales are scanned independently of one another; with the
/// default `rayon` feature enabled this fans out across a thread pool, but
/// results are always collected back into scan order before merging, so the
/// returned list is deterministic regardless of how the scan was scheduled.
pub fn detect(
    pixels: &[u8],
    width: u32,
    height: u32,
    cascade: &Cascade<'_>,
    params: &DetectionParams,
) -> Result<Vec<Detection>> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidParameter("width and height must be positive".to_string()));
    }
    params.validate()?;

    let (width, height) = (width as usize, height as usize);
    let expected_len = 4 * width * height;
    if pixels.len() != expected_len {
        return Err(Error::InvalidDimensions(format!(
            "expected {expected_len} bytes ({width}x{height} RGBA), got {}",
            pixels.len()
        )));
    }

    let min_w = cascade.min_width();
    let min_h = cascade.min_height();
    if min_w <= 0.0 || min_h <= 0.0 {
        return Err(Error::InvalidParameter("cascade minW/minH must be positive".to_string()));
    }

    let gray = color::grayscale(pixels, width, height);

    let build_flags = integral::BuildFlags {
        squared: true,
        tilted: true,
        sobel: params.edges_density > 0.0,
    };

    let sobel_plane = if build_flags.sobel {
        Some(gradient::sobel_magnitude(&gray, width, height))
    } else {
        None
    };
    let images = integral::build(&gray, width, height, sobel_plane.as_deref(), build_flags);

    let (width_i32, height_i32) = (width as i32, height as i32);

    let mut scale_levels = Vec::new();
    let mut scale = params.initial_scale * params.scale_factor;
    loop {
        let bw = (scale * min_w).floor() as i32;
        let bh = (scale * min_h).floor() as i32;
        if bw >= width_i32 || bh >= height_i32 {
            break;
        }
        scale_levels.push((scale, bw, bh));
        scale *= params.scale_factor;
    }

    let scan_scale = |scale: f64, bw: i32, bh: i32| -> Vec<Rect> {
        let mut hits = Vec::new();
        let step = ((scale * params.step_size + 0.5).floor() as i32).max(1);

        let mut i = 0;
        while i < height_i32 - bh {
            let mut j = 0;
            while j < width_i32 - bw {
                let passes_edge_prune = if build_flags.sobel {
                    let sobel = images
                        .sobel
                        .as_ref()
                        .expect("sobel integral required when edges_density > 0");
                    let area = f64::from(bw) * f64::from(bh) * 255.0;
                    let density = sobel.rect_sum(j, i, bw, bh) as f64 / area;
                    density >= params.edges_density
                } else {
                    true
                };

                if passes_edge_prune && evaluate_window(cascade, &images, i, j, bw, bh, scale) {
                    hits.push(Rect::new(j, i, bw, bh));
                }

                j += step;
            }
            i += step;
        }

        hits
    };

    #[cfg(feature = "rayon")]
    let candidates: Vec<Rect> = scale_levels
        .par_iter()
        .map(|&(scale, bw, bh)| scan_scale(scale, bw, bh))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    #[cfg(not(feature = "rayon"))]
    let candidates: Vec<Rect> = scale_levels
        .iter()
        .flat_map(|&(scale, bw, bh)| scan_scale(scale, bw, bh))
        .collect();

    let detections = merge_rectangles(&candidates, params.regions_overlap);

    log::debug!(
        "detect: {width}x{height}, {} scales, {} candidates, {} merged",
        scale_levels.len(),
        candidates.len(),
        detections.len()
    );

    Ok(detections)
}
