use crate::imgproc::integral::IntegralImages;
use crate::objdetect::cascade::Cascade;

/// Round-half-up then truncate toward zero, matching the source algorithm's
/// `(x + 0.5) | 0` coordinate rounding (see the crate's design notes on why
/// this is kept instead of banker's rounding).
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Evaluate every stage of `cascade` against the window with top-left
/// `(i, j)`, size `(bw, bh)`, at the given `scale` relative to the cascade's
/// base window. Returns `true` iff every stage passes.
///
/// Coordinates inside Haar rectangles are trusted to stay within the window;
/// no clamping is performed, matching the contract cascades are built under.
#[must_use]
pub fn evaluate_window(
    cascade: &Cascade<'_>,
    images: &IntegralImages,
    i: i32,
    j: i32,
    bw: i32,
    bh: i32,
    scale: f64,
) -> bool {
    let area = f64::from(bw) * f64::from(bh);
    let inverse_area = 1.0 / area;

    let sum = images.sat.rect_sum(j, i, bw, bh) as f64;
    let squared_sum = images
        .squared
        .as_ref()
        .map_or(0.0, |sq| sq.rect_sum(j, i, bw, bh) as f64);

    let mean = sum * inverse_area;
    let variance = squared_sum * inverse_area - mean * mean;
    let stddev = if variance > 0.0 { variance.sqrt() } else { 1.0 };

    for stage in cascade.stages() {
        let mut stage_sum = 0.0f64;

        for node in stage.nodes() {
            let mut rects_sum = 0.0f64;

            for rect in node.rects() {
                let rx = round_half_up(f64::from(j) + rect.x * scale);
                let ry = round_half_up(f64::from(i) + rect.y * scale);
                let rw = round_half_up(rect.w * scale);
                let rh = round_half_up(rect.h * scale);

                let rect_value = if node.tilted {
                    let tilted = images
                        .tilted
                        .as_ref()
                        .expect("cascade uses a tilted feature but no tilted integral image was built");
                    let (l, t, w, h) = (rx, ry, rw, rh);
                    let w1 = tilted.at(l - h + w, t + w + h - 1);
                    let w2 = tilted.at(l, t - 1);
                    let w3 = tilted.at(l - h, t + h - 1);
                    let w4 = tilted.at(l + w, t + w - 1);
                    (w1 + w2 - w3 - w4) as f64
                } else {
                    images.sat.rect_sum(rx, ry, rw, rh) as f64
                };

                rects_sum += rect_value * rect.weight;
            }

            if rects_sum * inverse_area < node.threshold * stddev {
                stage_sum += node.left_value;
            } else {
                stage_sum += node.right_value;
            }
        }

        if stage_sum < stage.threshold {
            if cfg!(debug_assertions) {
                log::trace!("window ({j},{i}) size ({bw}x{bh}) rejected at stage threshold {}", stage.threshold);
            }
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imgproc::integral::{build, BuildFlags};
    use crate::objdetect::cascades;

    #[test]
    fn test_permissive_stock_cascade_accepts_every_window() {
        let gray = vec![128u8; 48 * 48];
        let images = build(&gray, 48, 48, None, BuildFlags::sat_only());
        let cascade = Cascade::new(cascades::FACE).unwrap();

        assert!(evaluate_window(&cascade, &images, 0, 0, 24, 24, 1.0));
    }

    #[test]
    fn test_stage_threshold_rejects() {
        // A single node whose output is always leftValue, with a stage
        // threshold higher than leftValue, must reject every window.
        let data = vec![
            10.0, 10.0, // minW, minH
            100.0, 1.0, // stage threshold unreachably high, nodeCount=1
            0.0, 1.0, 0.0, 0.0, 10.0, 10.0, 1.0, // node: whole window rect
            1_000_000.0, 0.1, 0.1, // nodeThreshold huge => always takes leftValue branch
        ];
        let cascade = Cascade::new(&data).unwrap();
        let gray = vec![10u8; 20 * 20];
        let images = build(&gray, 20, 20, None, BuildFlags::sat_only());

        assert!(!evaluate_window(&cascade, &images, 0, 0, 10, 10, 1.0));
    }
}
