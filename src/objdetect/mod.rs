pub mod cascade;
pub mod cascades;
pub mod detector;
pub mod evaluator;
pub mod merge;
pub mod tracker;

pub use cascade::{Cascade, HaarRect, Node, Stage};
pub use detector::{detect, DetectionParams};
pub use merge::{merge_rectangles, DisjointSet};
pub use tracker::{ObjectTracker, TrackEvent};
