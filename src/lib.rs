//! # viola-jones
//!
//! A pure-Rust Viola-Jones object detector: given a grayscale-convertible
//! RGBA pixel buffer and a trained Haar cascade, [`detect`] returns merged
//! bounding rectangles where the cascade fires.
//!
//! The hard part is computing integral images (standard, squared, tilted,
//! and Sobel) in one pass over the pixels, evaluating a staged cascade of
//! Haar features at every position and scale using only O(1) rectangle-sum
//! lookups, and merging overlapping detections via disjoint-set clustering.
//! Surrounding concerns (capturing frames, scheduling per-frame work,
//! packaging) are treated as external collaborators: this crate consumes
//! `(pixels, width, height, cascade, params)` and returns a list of
//! rectangles.
//!
//! ## Example
//!
//! ```rust
//! use viola_jones::prelude::*;
//! use viola_jones::objdetect::cascades;
//!
//! # fn main() -> viola_jones::error::Result<()> {
//! let width = 64;
//! let height = 64;
//! let pixels = vec![128u8; 4 * width as usize * height as usize];
//!
//! let cascade = Cascade::new(cascades::FACE)?;
//! let detections = detect(&pixels, width, height, &cascade, &DetectionParams::default())?;
//! println!("found {} detections", detections.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod imgproc;
pub mod objdetect;

pub mod prelude {
    //! Convenience re-exports of the crate's primary types.
    pub use crate::core::{Detection, Point, Rect, Size};
    pub use crate::error::{Error, Result};
    pub use crate::objdetect::{detect, Cascade, DetectionParams, ObjectTracker};
}
