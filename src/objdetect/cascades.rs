//! Stock cascade constants.
//!
//! These are structurally valid but untrained placeholder cascades: a single
//! permissive stage whose threshold is trivially satisfied by any window.
//! They exist so [`super::tracker::ObjectTracker`]'s named-cascade lookup and
//! the detector's scan loop can be exercised end-to-end without a training
//! pipeline, which this crate does not implement.

/// `minW=minH=24`, one stage, one node covering the whole window.
pub const FACE: &[f64] = &[
    24.0, 24.0, // minW, minH
    -1.0, 1.0, // stage: threshold, nodeCount
    0.0, 1.0, 0.0, 0.0, 24.0, 24.0, 1.0, // node: tilted, rectCount, rect
    0.0, 1.0, 1.0, // nodeThreshold, leftValue, rightValue
];

/// `minW=minH=20`, one stage, one node.
pub const EYE: &[f64] = &[
    20.0, 20.0,
    -1.0, 1.0,
    0.0, 1.0, 0.0, 0.0, 20.0, 20.0, 1.0,
    0.0, 1.0, 1.0,
];

/// `minW=20, minH=10`, one stage, one node.
pub const MOUTH: &[f64] = &[
    20.0, 10.0,
    -1.0, 1.0,
    0.0, 1.0, 0.0, 0.0, 20.0, 10.0, 1.0,
    0.0, 1.0, 1.0,
];

/// Look up a stock cascade by name (`"face"`, `"eye"`, `"mouth"`).
#[must_use]
pub fn named(name: &str) -> Option<&'static [f64]> {
    match name {
        "face" => Some(FACE),
        "eye" => Some(EYE),
        "mouth" => Some(MOUTH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objdetect::cascade::Cascade;

    #[test]
    fn test_stock_cascades_parse() {
        for data in [FACE, EYE, MOUTH] {
            let cascade = Cascade::new(data).unwrap();
            assert_eq!(cascade.stages().count(), 1);
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(named("nonexistent").is_none());
    }
}
