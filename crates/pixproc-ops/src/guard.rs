//! Shape validation guards for image operations.
//!
//! Every operation checks its inputs here before touching the output, so a
//! failed call never leaves a half-written image behind.
//!
//! # Example
//!
//! ```rust
//! use pixproc_core::Image;
//! use pixproc_ops::guard::{ensure_same_size, ensure_square};
//!
//! let input = Image::new(4, 4).unwrap();
//! let output = Image::new(4, 4).unwrap();
//! ensure_same_size(&input, &output, "complement").unwrap();
//! ensure_square(&input, "transpose").unwrap();
//!
//! let wide = Image::new(4, 2).unwrap();
//! assert!(ensure_square(&wide, "transpose").is_err());
//! ```

use crate::{OpsError, OpsResult};
use pixproc_core::Image;
use tracing::debug;

/// Validates that `output` has exactly the dimensions of `input`.
///
/// # Arguments
///
/// * `input` - Source image
/// * `output` - Destination image
/// * `op` - Name of the operation (for logging)
pub fn ensure_same_size(input: &Image, output: &Image, op: &str) -> OpsResult<()> {
    if input.same_dimensions(output) {
        return Ok(());
    }
    let (expected_width, expected_height) = input.dimensions();
    let (width, height) = output.dimensions();
    debug!(
        op,
        expected_width, expected_height, width, height, "output size mismatch"
    );
    Err(OpsError::SizeMismatch {
        expected_width,
        expected_height,
        width,
        height,
    })
}

/// Validates that `input` is square.
pub fn ensure_square(input: &Image, op: &str) -> OpsResult<()> {
    if input.is_square() {
        return Ok(());
    }
    let (width, height) = input.dimensions();
    debug!(op, width, height, "input is not square");
    Err(OpsError::NotSquare { width, height })
}
