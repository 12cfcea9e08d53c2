//! Output writers for gradient specifications.
//!
//! Writers turn a [`Gradient`](crate::Gradient) into a rendered document.
//! Every writer validates the specification before rendering, so an
//! invalid color list can never produce partial output.

mod svg;

pub use svg::SvgWriter;

use crate::{Gradient, Result};

/// Trait for gradient document writers.
pub trait Writer {
    /// The rendered document type.
    type Output;

    /// Validate `gradient` and render it.
    ///
    /// # Errors
    ///
    /// Returns [`SvgradError::InvalidColors`](crate::SvgradError::InvalidColors)
    /// if any color token fails syntactic validation, enumerating every
    /// failing (index, token) pair.
    fn write(&self, gradient: &Gradient) -> Result<Self::Output>;
}
