pub mod color;
pub mod filter;
pub mod gradient;
pub mod integral;

pub use color::{grayscale, grayscale_float};
pub use gradient::sobel_magnitude;
pub use integral::{build as build_integral_images, BuildFlags, IntegralImage, IntegralImages, TiltedIntegralImage};
