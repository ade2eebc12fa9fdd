use thiserror::Error;

/// Detector error types.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
