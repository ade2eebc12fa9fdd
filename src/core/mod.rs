pub mod mat;
pub mod types;

pub use mat::Mat;
pub use types::*;
