//! # pixproc-ops
//!
//! Per-pixel transforms for packed RGBA images.
//!
//! Every operation borrows its input immutably, writes into a caller-provided
//! output of the required size, and validates shapes before the first write.
//!
//! # Modules
//!
//! - [`complement`] - Bitwise color complement
//! - [`transform`] - Transpose
//! - [`mask`] - Ellipse mask
//! - [`emboss`] - Emboss effect
//! - [`geometry`] - Ellipse membership test
//! - [`operation`] - Select an operation by name
//!
//! # Example
//!
//! ```rust
//! use pixproc_core::{Image, Pixel};
//! use pixproc_ops::{complement, transpose};
//!
//! let input = Image::filled(3, 3, Pixel::new(10, 20, 30, 255)).unwrap();
//! let mut inverted = Image::new(3, 3).unwrap();
//! complement(&input, &mut inverted).unwrap();
//!
//! let mut flipped = Image::new(3, 3).unwrap();
//! transpose(&inverted, &mut flipped).unwrap();
//! assert_eq!(flipped.pixel(0, 2), Pixel::new(245, 235, 225, 255));
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events at `trace` and `debug` level. No
//! subscriber is installed here.
//!
//! # Feature Flags
//!
//! - `serde` - Serialize [`Operation`] by its lowercase name

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod complement;
pub mod emboss;
pub mod geometry;
pub mod guard;
pub mod mask;
pub mod operation;
pub mod transform;

pub use complement::complement;
pub use emboss::emboss;
pub use error::{OpsError, OpsResult};
pub use geometry::{in_ellipse, Ellipse};
pub use mask::ellipse_mask;
pub use operation::Operation;
pub use transform::transpose;
