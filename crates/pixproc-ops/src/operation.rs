//! Named selection of the available transforms.
//!
//! [`Operation`] lets a caller pick a transform by name (for instance from a
//! command line or a config file) and run it without matching on function
//! pointers.
//!
//! # Example
//!
//! ```rust
//! use pixproc_core::Image;
//! use pixproc_ops::Operation;
//!
//! let op: Operation = "emboss".parse().unwrap();
//! let input = Image::new(4, 4).unwrap();
//! let (w, h) = op.output_dimensions(input.width(), input.height()).unwrap();
//! let mut output = Image::new(w, h).unwrap();
//! op.apply(&input, &mut output).unwrap();
//! ```

use crate::{OpsError, OpsResult};
use pixproc_core::Image;
use std::fmt;
use std::str::FromStr;

/// One of the pixel transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// [`complement`](crate::complement::complement)
    Complement,
    /// [`transpose`](crate::transform::transpose)
    Transpose,
    /// [`ellipse_mask`](crate::mask::ellipse_mask)
    Ellipse,
    /// [`emboss`](crate::emboss::emboss)
    Emboss,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Complement,
        Operation::Transpose,
        Operation::Ellipse,
        Operation::Emboss,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Complement => "complement",
            Operation::Transpose => "transpose",
            Operation::Ellipse => "ellipse",
            Operation::Emboss => "emboss",
        }
    }

    /// Output size the caller must allocate for an input of `width x height`.
    ///
    /// # Errors
    ///
    /// [`OpsError::NotSquare`] for [`Operation::Transpose`] on a non-square
    /// input.
    pub fn output_dimensions(self, width: u32, height: u32) -> OpsResult<(u32, u32)> {
        match self {
            Operation::Transpose if width != height => {
                Err(OpsError::NotSquare { width, height })
            }
            _ => Ok((width, height)),
        }
    }

    /// Runs the operation from `input` into `output`.
    pub fn apply(self, input: &Image, output: &mut Image) -> OpsResult<()> {
        match self {
            Operation::Complement => crate::complement::complement(input, output),
            Operation::Transpose => crate::transform::transpose(input, output),
            Operation::Ellipse => crate::mask::ellipse_mask(input, output),
            Operation::Emboss => crate::emboss::emboss(input, output),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OpsError::UnknownOperation(s.to_string()))
    }
}
