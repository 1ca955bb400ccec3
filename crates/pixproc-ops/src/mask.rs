//! Ellipse mask.
//!
//! Keeps the pixels inside the ellipse inscribed in the image (see
//! [`geometry`](crate::geometry)) and paints everything else opaque black.
//! The output is filled before the copy pass, so its prior contents never
//! leak through.

use crate::geometry::Ellipse;
use crate::guard::ensure_same_size;
use crate::OpsResult;
use pixproc_core::{Image, Pixel};
use tracing::{debug, trace};

/// Copies the in-ellipse pixels of `input` into `output`; all other output
/// pixels become [`Pixel::OPAQUE_BLACK`].
///
/// Images narrower or shorter than 2 pixels have no ellipse members and come
/// out entirely black.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`](crate::OpsError::SizeMismatch) if `output`
/// isn't the same size as `input`.
///
/// # Example
///
/// ```rust
/// use pixproc_core::{Image, Pixel};
/// use pixproc_ops::mask::ellipse_mask;
///
/// let white = Pixel::new(255, 255, 255, 255);
/// let input = Image::filled(10, 10, white).unwrap();
/// let mut output = Image::new(10, 10).unwrap();
/// ellipse_mask(&input, &mut output).unwrap();
///
/// assert_eq!(output.pixel(5, 5), white);
/// assert_eq!(output.pixel(0, 0), Pixel::OPAQUE_BLACK);
/// ```
pub fn ellipse_mask(input: &Image, output: &mut Image) -> OpsResult<()> {
    let (width, height) = input.dimensions();
    trace!(width, height, "ellipse_mask");
    ensure_same_size(input, output, "ellipse_mask")?;

    output.fill(Pixel::OPAQUE_BLACK);

    let ellipse = Ellipse::inscribed(width, height);
    let mut members = 0usize;
    for (row, col) in input.coords() {
        if ellipse.contains(row, col) {
            output.set_pixel(row, col, input.pixel(row, col));
            members += 1;
        }
    }

    debug!(width, height, members, "ellipse mask applied");
    Ok(())
}
