//! Ellipse membership for the centered, image-inscribed ellipse.
//!
//! For an image of width `w` and height `h`, the semi-axes are
//! `a = floor(w / 2)` and `b = floor(h / 2)` and the center is the pixel at
//! row `b`, column `a`. A pixel at horizontal distance `x` and vertical
//! distance `y` from the center is a member if
//!
//! ```text
//! floor(10000 * x * x / (a * a)) + floor(10000 * y * y / (b * b)) <= 10000
//! ```
//!
//! Each term is squared, scaled, then divided, so integer truncation happens
//! once per term. A zero semi-axis (width or height below 2) has no members.
//!
//! # Example
//!
//! ```rust
//! use pixproc_ops::geometry::Ellipse;
//!
//! let e = Ellipse::inscribed(10, 10);
//! assert!(e.contains(5, 5));
//! assert!(!e.contains(0, 0));
//! ```

use pixproc_core::Image;

/// Fixed-point scale applied to both ellipse terms.
const SCALE: i128 = 10_000;

/// Centered ellipse inscribed in a `width x height` raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    /// Horizontal semi-axis, also the center column.
    a: i128,
    /// Vertical semi-axis, also the center row.
    b: i128,
}

impl Ellipse {
    /// Builds the ellipse for an image of the given dimensions.
    pub fn inscribed(width: u32, height: u32) -> Self {
        Self {
            a: i128::from(width / 2),
            b: i128::from(height / 2),
        }
    }

    /// Center as `(row, col)`.
    pub fn center(&self) -> (u32, u32) {
        (self.b as u32, self.a as u32)
    }

    /// True if either semi-axis is zero, in which case nothing is a member.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0 || self.b == 0
    }

    /// Tests whether `(row, col)` lies inside the ellipse.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let x = i128::from(col) - self.a;
        let y = i128::from(row) - self.b;

        let term1 = (SCALE * x * x) / (self.a * self.a);
        let term2 = (SCALE * y * y) / (self.b * self.b);

        term1 + term2 <= SCALE
    }
}

/// Tests whether `(row, col)` lies in the ellipse inscribed in `img`.
pub fn in_ellipse(img: &Image, row: u32, col: u32) -> bool {
    Ellipse::inscribed(img.width(), img.height()).contains(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_member() {
        for (w, h) in [(2, 2), (3, 7), (10, 10), (11, 4), (640, 480)] {
            let e = Ellipse::inscribed(w, h);
            let (row, col) = e.center();
            assert_eq!((row, col), (h / 2, w / 2));
            assert!(e.contains(row, col), "{w}x{h}");
        }
    }

    #[test]
    fn test_corners_outside_10x10() {
        let e = Ellipse::inscribed(10, 10);
        assert!(!e.contains(0, 0));
        assert!(!e.contains(0, 9));
        assert!(!e.contains(9, 0));
        assert!(!e.contains(9, 9));
    }

    #[test]
    fn test_axis_extremes_on_boundary() {
        // x == a gives term1 == 10000 exactly, which is still inside.
        let e = Ellipse::inscribed(10, 10);
        assert!(e.contains(5, 0));
        assert!(e.contains(0, 5));
        assert!(!e.contains(1, 1));
    }

    #[test]
    fn test_truncation_per_term() {
        // 10x6: a = 5, b = 3. At (row 1, col 2): x = -3, y = -2.
        // term1 = 90000 / 25 = 3600, term2 = 40000 / 9 = 4444 (trunc).
        let e = Ellipse::inscribed(10, 6);
        assert!(e.contains(1, 2));
        // (row 1, col 1): x = -4, y = -2 -> 6400 + 4444 = 10844.
        assert!(!e.contains(1, 1));
    }

    #[test]
    fn test_degenerate_has_no_members() {
        let single = Ellipse::inscribed(1, 1);
        assert!(single.is_degenerate());
        assert!(!single.contains(0, 0));

        let column = Ellipse::inscribed(1, 9);
        assert!((0..9).all(|row| !column.contains(row, 0)));

        let strip = Ellipse::inscribed(9, 1);
        assert!((0..9).all(|col| !strip.contains(0, col)));
    }

    #[test]
    fn test_large_image_no_overflow() {
        // 10000 * x * x would overflow i32 here.
        let e = Ellipse::inscribed(60_000, 60_000);
        assert!(e.contains(30_000, 30_000));
        assert!(!e.contains(0, 0));
        assert!(e.contains(30_000, 0));
    }

    #[test]
    fn test_in_ellipse_uses_image_shape() {
        let img = Image::new(4, 2).unwrap();
        assert!(in_ellipse(&img, 1, 2));
        assert!(in_ellipse(&img, 1, 0));
        assert!(!in_ellipse(&img, 0, 0));
    }
}
