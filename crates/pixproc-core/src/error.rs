//! Error types for pixproc-core operations.
//!
//! # Usage
//!
//! ```rust
//! use pixproc_core::{Error, Result};
//!
//! fn check(row: u32, col: u32, width: u32, height: u32) -> Result<()> {
//!     if row >= height || col >= width {
//!         return Err(Error::OutOfBounds { row, col, width, height });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 0, 4, 2).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or addressing an [`Image`](crate::Image).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Coordinate lies outside the image.
    ///
    /// Only returned by the checked accessors; the indexing accessors panic
    /// instead, as slices do.
    #[error("pixel (row {row}, col {col}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// Row that was out of bounds
        row: u32,
        /// Column that was out of bounds
        col: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, when `width * height` overflows,
    /// or when a pixel buffer's length doesn't match the dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
