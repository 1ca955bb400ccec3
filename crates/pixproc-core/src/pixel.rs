//! Packed 32-bit RGBA pixel.
//!
//! A [`Pixel`] is a single `u32` word holding four independent 8-bit
//! channels. The layout is fixed:
//!
//! ```text
//! bit  31      24 23      16 15       8 7        0
//!      [  red   ] [ green  ] [  blue  ] [ alpha  ]
//! ```
//!
//! Channels carry no implicit relationship to each other (no
//! premultiplication, no gamma). Constructing a pixel from `u8` channels
//! makes out-of-range channel values unrepresentable.
//!
//! # Example
//!
//! ```
//! use pixproc_core::Pixel;
//!
//! let px = Pixel::new(10, 20, 30, 255);
//! assert_eq!(px.to_raw(), 0x0A14_1EFF);
//! assert_eq!((px.r(), px.g(), px.b(), px.a()), (10, 20, 30, 255));
//! ```

use std::fmt;

const R_SHIFT: u32 = 24;
const G_SHIFT: u32 = 16;
const B_SHIFT: u32 = 8;
const A_SHIFT: u32 = 0;

/// A 32-bit packed RGBA pixel (red in the most significant byte).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Pixel(u32);

impl Pixel {
    /// Opaque black `(0, 0, 0, 255)`.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);

    /// Fully transparent black `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self(0);

    /// Packs four channels into a pixel word.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            (r as u32) << R_SHIFT
                | (g as u32) << G_SHIFT
                | (b as u32) << B_SHIFT
                | (a as u32) << A_SHIFT,
        )
    }

    /// Wraps a raw packed word.
    #[inline]
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    /// Returns the raw packed word.
    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> R_SHIFT) & 0xFF) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> G_SHIFT) & 0xFF) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> B_SHIFT) & 0xFF) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        ((self.0 >> A_SHIFT) & 0xFF) as u8
    }

    /// Unpacks into `[r, g, b, a]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Replaces the color channels, keeping alpha.
    ///
    /// ```
    /// use pixproc_core::Pixel;
    ///
    /// let px = Pixel::new(1, 2, 3, 42).with_rgb(128, 128, 128);
    /// assert_eq!(px, Pixel::new(128, 128, 128, 42));
    /// ```
    #[inline]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, self.a())
    }
}

impl From<u32> for Pixel {
    #[inline]
    fn from(word: u32) -> Self {
        Self::from_raw(word)
    }
}

impl From<Pixel> for u32 {
    #[inline]
    fn from(px: Pixel) -> Self {
        px.to_raw()
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pixel")
            .field(&self.r())
            .field(&self.g())
            .field(&self.b())
            .field(&self.a())
            .finish()
    }
}

impl fmt::Display for Pixel {
    /// Formats as `#rrggbbaa`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
