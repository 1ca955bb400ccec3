//! Emboss effect.
//!
//! Each interior pixel is compared with its upper-left neighbor. The channel
//! difference `neighbor - current` with the largest magnitude becomes the
//! output gray level around a mid-gray of 128:
//!
//! ```text
//! dr = nr - r,  dg = ng - g,  db = nb - b
//! diff = the largest |d|, ties broken red, then green, then blue
//! gray = clamp(128 + diff, 0, 255)
//! ```
//!
//! The top row and left column have no upper-left neighbor and become flat
//! mid-gray. Alpha is always carried through from the input.

use crate::guard::ensure_same_size;
use crate::OpsResult;
use pixproc_core::{Image, Pixel};
use tracing::trace;

/// Gray level for pixels without an upper-left neighbor.
pub const MID_GRAY: u8 = 128;

/// Picks the difference with the largest absolute value.
///
/// Ties go to the earlier argument: red beats green and blue, green beats
/// blue.
///
/// ```rust
/// use pixproc_ops::emboss::dominant_difference;
///
/// assert_eq!(dominant_difference(-5, 5, 3), -5);
/// assert_eq!(dominant_difference(1, -7, 7), -7);
/// ```
#[inline]
pub fn dominant_difference(dr: i32, dg: i32, db: i32) -> i32 {
    let mut diff = dr;
    if dg.abs() > diff.abs() {
        diff = dg;
    }
    if db.abs() > diff.abs() {
        diff = db;
    }
    diff
}

/// Embosses one interior pixel against its upper-left `neighbor`.
#[inline]
pub fn emboss_pixel(current: Pixel, neighbor: Pixel) -> Pixel {
    let delta = |n: u8, c: u8| i32::from(n) - i32::from(c);
    let diff = dominant_difference(
        delta(neighbor.r(), current.r()),
        delta(neighbor.g(), current.g()),
        delta(neighbor.b(), current.b()),
    );
    let gray = (i32::from(MID_GRAY) + diff).clamp(0, 255) as u8;
    current.with_rgb(gray, gray, gray)
}

/// Writes the emboss of `input` into `output`.
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
/// use pixproc_ops::emboss::emboss;
///
/// let input = Image::filled(3, 3, Pixel::new(100, 100, 100, 255)).unwrap();
/// let mut output = Image::new(3, 3).unwrap();
/// emboss(&input, &mut output).unwrap();
/// assert_eq!(output.pixel(2, 2), Pixel::new(128, 128, 128, 255));
/// ```
pub fn emboss(input: &Image, output: &mut Image) -> OpsResult<()> {
    let (width, height) = input.dimensions();
    trace!(width, height, "emboss");
    ensure_same_size(input, output, "emboss")?;

    for (row, col) in input.coords() {
        let current = input.pixel(row, col);
        let embossed = if row == 0 || col == 0 {
            current.with_rgb(MID_GRAY, MID_GRAY, MID_GRAY)
        } else {
            emboss_pixel(current, input.pixel(row - 1, col - 1))
        };
        output.set_pixel(row, col, embossed);
    }

    Ok(())
}
