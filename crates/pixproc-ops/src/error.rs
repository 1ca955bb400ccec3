//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Operation requires a square image.
    #[error("dimension mismatch: {width}x{height} image is not square")]
    NotSquare {
        /// Input width
        width: u32,
        /// Input height
        height: u32,
    },

    /// Output buffer has the wrong size for the operation.
    #[error(
        "size mismatch: output is {width}x{height}, expected {expected_width}x{expected_height}"
    )]
    SizeMismatch {
        /// Required output width
        expected_width: u32,
        /// Required output height
        expected_height: u32,
        /// Actual output width
        width: u32,
        /// Actual output height
        height: u32,
    },

    /// Operation name not recognized.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Error from the core image types.
    #[error(transparent)]
    Core(#[from] pixproc_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
