//! Bitwise color complement.
//!
//! Inverts every bit of the red, green, and blue channels (`255 - c`) and
//! leaves alpha untouched. Applying it twice restores the original image.
//!
//! # Example
//!
//! ```rust
//! use pixproc_core::{Image, Pixel};
//! use pixproc_ops::complement::complement;
//!
//! let input = Image::filled(2, 2, Pixel::new(10, 20, 30, 1)).unwrap();
//! let mut output = Image::new(2, 2).unwrap();
//! complement(&input, &mut output).unwrap();
//! assert_eq!(output.pixel(0, 0), Pixel::new(245, 235, 225, 1));
//! ```

use crate::guard::ensure_same_size;
use crate::OpsResult;
use pixproc_core::{Image, Pixel};
use tracing::trace;

/// Complements the color channels of one pixel.
#[inline]
pub fn complement_pixel(px: Pixel) -> Pixel {
    px.with_rgb(!px.r(), !px.g(), !px.b())
}

/// Writes the color complement of `input` into `output`.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`](crate::OpsError::SizeMismatch) if `output`
/// isn't the same size as `input`. Nothing is written in that case.
pub fn complement(input: &Image, output: &mut Image) -> OpsResult<()> {
    let (width, height) = input.dimensions();
    trace!(width, height, "complement");
    ensure_same_size(input, output, "complement")?;

    for (src, dst) in input.pixels().iter().zip(output.pixels_mut()) {
        *dst = complement_pixel(*src);
    }

    Ok(())
}
