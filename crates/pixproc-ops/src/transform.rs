//! Geometric transformation operations.
//!
//! # Operations
//!
//! - [`transpose`] - Swap rows and columns of a square image
//!
//! # Example
//!
//! ```rust
//! use pixproc_core::Image;
//! use pixproc_ops::transform::transpose;
//!
//! let src = Image::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let mut dst = Image::new(2, 2).unwrap();
//! transpose(&src, &mut dst).unwrap();
//! assert_eq!(dst.into_raw(), vec![1, 3, 2, 4]);
//! ```

use crate::guard::{ensure_same_size, ensure_square};
use crate::OpsResult;
use pixproc_core::Image;
use tracing::trace;

/// Transposes a square image: the pixel at `(row, col)` goes to `(col, row)`.
///
/// Pixels are copied unmodified.
///
/// # Errors
///
/// - [`OpsError::NotSquare`](crate::OpsError::NotSquare) if `input` is not
///   square
/// - [`OpsError::SizeMismatch`](crate::OpsError::SizeMismatch) if `output`
///   differs in size from `input`
///
/// Both are checked before any write, so `output` is untouched on failure.
pub fn transpose(input: &Image, output: &mut Image) -> OpsResult<()> {
    let (width, height) = input.dimensions();
    trace!(width, height, "transpose");
    ensure_square(input, "transpose")?;
    ensure_same_size(input, output, "transpose")?;

    for (row, col) in input.coords() {
        output.set_pixel(col, row, input.pixel(row, col));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use pixproc_core::Pixel;

    #[test]
    fn test_transpose_3x3() {
        let src = Image::from_raw(3, 3, (1..=9).collect()).unwrap();
        let mut dst = Image::new(3, 3).unwrap();
        transpose(&src, &mut dst).unwrap();
        assert_eq!(dst.into_raw(), vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
    }

    #[test]
    fn test_transpose_1x1() {
        let src = Image::from_raw(1, 1, vec![0xDEAD_BEEF]).unwrap();
        let mut dst = Image::new(1, 1).unwrap();
        transpose(&src, &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let src = Image::from_raw(5, 5, (0..25).map(|i| i * 0x0101_0101).collect()).unwrap();
        let mut once = Image::new(5, 5).unwrap();
        let mut twice = Image::new(5, 5).unwrap();
        transpose(&src, &mut once).unwrap();
        transpose(&once, &mut twice).unwrap();
        assert_eq!(twice, src);
        assert_ne!(once, src);
    }

    #[test]
    fn test_non_square_fails_without_writes() {
        let src = Image::from_raw(3, 2, vec![1; 6]).unwrap();
        let sentinel = Pixel::new(7, 7, 7, 7);
        let mut dst = Image::filled(3, 2, sentinel).unwrap();
        let err = transpose(&src, &mut dst).unwrap_err();
        assert_eq!(err, OpsError::NotSquare { width: 3, height: 2 });
        assert!(dst.pixels().iter().all(|&p| p == sentinel));
    }

    #[test]
    fn test_output_size_checked() {
        let src = Image::new(3, 3).unwrap();
        let mut dst = Image::new(2, 2).unwrap();
        assert!(matches!(
            transpose(&src, &mut dst),
            Err(OpsError::SizeMismatch { .. })
        ));
    }
}
