//! # pixproc-core
//!
//! Core types for packed RGBA raster processing.
//!
//! - [`Pixel`] - 32-bit packed RGBA word with channel accessors
//! - [`Image`] - Row-major pixel buffer with fixed, validated dimensions
//! - [`Error`] - Construction and bounds errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixproc-core (this crate)
//!    ^
//!    |
//!    +-- pixproc-ops (complement, transpose, ellipse mask, emboss)
//!    +-- pixproc-tests (integration tests)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Pixel`] and [`Image`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::Pixel;

/// Prelude module for convenient imports.
///
/// ```
/// use pixproc_core::prelude::*;
///
/// let img = Image::filled(1, 1, Pixel::OPAQUE_BLACK).unwrap();
/// assert_eq!(img.pixel(0, 0).a(), 255);
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::Pixel;
}
