//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by dataset loading, filtering, configuration and artifact
/// output. Numerical edge cases are clamped and never reach this type.
#[derive(Debug, Error)]
pub enum NeuronError {
    /// A caller-supplied argument was rejected before any computation ran.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A CIFAR-10 batch file did not match the expected record layout.
    #[error("malformed dataset: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NeuronError>;
