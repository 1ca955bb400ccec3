//! Image buffer for packed RGBA pixels.
//!
//! [`Image`] owns a row-major sequence of exactly `width * height`
//! [`Pixel`]s. The shape is fixed at construction and never changes; every
//! constructor validates it, so an `Image` that exists is always well formed.
//!
//! # Memory Layout
//!
//! ```text
//! index = row * width + col
//!
//! [P(0,0) P(0,1) ... P(0,w-1)]  <- Row 0
//! [P(1,0) P(1,1) ... P(1,w-1)]  <- Row 1
//! ...
//! ```
//!
//! No padding between rows.
//!
//! # Usage
//!
//! ```rust
//! use pixproc_core::{Image, Pixel};
//!
//! let mut img = Image::new(4, 3).unwrap();
//! img.set_pixel(1, 2, Pixel::new(255, 0, 0, 255));
//!
//! assert_eq!(img.index(1, 2), 6);
//! assert_eq!(img.pixel(1, 2).r(), 255);
//! ```
//!
//! # Used By
//!
//! - `pixproc-ops` - every transform reads one `Image` and writes another

use crate::{Error, Pixel, Result};

/// Owned RGBA raster with row-major storage.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawImage"))]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

/// Unvalidated serde shadow of [`Image`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawImage {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawImage> for Image {
    type Error = Error;

    fn try_from(raw: RawImage) -> Result<Self> {
        Image::from_pixels(raw.width, raw.height, raw.data)
    }
}

/// Validates dimensions and returns the pixel count.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be positive",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows usize"))
}

impl Image {
    /// Creates an image filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Creates an image with every pixel set to `pixel`.
    ///
    /// ```rust
    /// use pixproc_core::{Image, Pixel};
    ///
    /// let img = Image::filled(2, 2, Pixel::OPAQUE_BLACK).unwrap();
    /// assert!(img.pixels().iter().all(|&p| p == Pixel::OPAQUE_BLACK));
    /// ```
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![pixel; count],
        })
    }

    /// Creates an image from existing pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`
    /// or either dimension is zero.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates an image from raw packed words in row-major order.
    ///
    /// Same validation as [`from_pixels`](Self::from_pixels).
    pub fn from_raw(width: u32, height: u32, words: Vec<u32>) -> Result<Self> {
        Self::from_pixels(width, height, words.into_iter().map(Pixel::from_raw).collect())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, always `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; images have positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if width equals height.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True if both images have the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Converts `(row, col)` to a linear index: `row * width + col`.
    ///
    /// The coordinate is not range-checked here; the accessors that use the
    /// index go through slice indexing and panic on a bad coordinate.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.width as usize + col as usize
    }

    #[inline]
    fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> Pixel {
        assert!(
            self.contains(row, col),
            "pixel (row {row}, col {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.data[self.index(row, col)]
    }

    /// Sets the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel) {
        assert!(
            self.contains(row, col),
            "pixel (row {row}, col {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let i = self.index(row, col);
        self.data[i] = pixel;
    }

    /// Returns the pixel at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<Pixel> {
        self.contains(row, col).then(|| self.data[self.index(row, col)])
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the image.
    pub fn try_pixel(&self, row: u32, col: u32) -> Result<Pixel> {
        self.get(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// Pixels of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[Pixel] {
        let start = row as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Mutable access to all pixels in row-major order.
    ///
    /// The slice length is fixed, so the shape invariant still holds.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Sets every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.data.fill(pixel);
    }

    /// Iterates over every `(row, col)` in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// Consumes the image and returns the raw packed words.
    pub fn into_raw(self) -> Vec<u32> {
        self.data.into_iter().map(Pixel::to_raw).collect()
    }
}
