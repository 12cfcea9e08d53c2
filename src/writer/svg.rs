//! SVG document writer implementation.
//!
//! Converts gradient specifications into standalone SVG documents.
//!
//! # Mapping Strategy
//!
//! - orientation -> `linearGradient` / `radialGradient` element
//! - color token (trimmed) -> `<stop stop-color>` in source order
//! - index / count -> `<stop offset>` percentage
//! - a single full-bleed `<rect>` references the gradient definition
//!
//! Linear gradients carry a `gradientTransform="rotate(90)"` so the visual
//! axis runs vertically; radial gradients need no transform. Nothing else
//! is emitted - no viewBox, no styles, no metadata.

use crate::color::invalid_entries;
use crate::writer::Writer;
use crate::{Gradient, Orientation, Result, SvgradError};

/// SVG document writer.
///
/// Generates a complete document: XML prolog, one gradient definition and
/// a full-bleed rectangle filled by it. Rendering is pure - the writer
/// holds no mutable state and performs no I/O.
pub struct SvgWriter {
    /// Element id linking the `<rect>` fill to the gradient definition.
    id: String,
}

impl SvgWriter {
    /// Create a new SVG writer with default settings.
    pub fn new() -> Self {
        Self {
            id: "g".to_string(),
        }
    }

    /// Reject the gradient unless every color token validates.
    fn validate(&self, gradient: &Gradient) -> Result<()> {
        let invalid = invalid_entries(&gradient.colors);
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SvgradError::InvalidColors(invalid))
        }
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for SvgWriter {
    type Output = String;

    fn write(&self, gradient: &Gradient) -> Result<String> {
        // All-or-nothing: no document is assembled past this point unless
        // the whole color list is syntactically sound.
        self.validate(gradient)?;

        let kind = gradient.orientation;
        let transform = match kind {
            Orientation::Linear => " gradientTransform=\"rotate(90)\"",
            Orientation::Radial => "",
        };

        let stops: String = gradient
            .stops()
            .map(|stop| {
                format!(
                    "<stop offset=\"{}%\" stop-color=\"{}\"/>",
                    stop.offset, stop.color
                )
            })
            .collect();

        let id = &self.id;
        Ok(format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <svg xmlns=\"http://www.w3.org/2000/svg\">\
             <defs>\
             <{kind}Gradient id=\"{id}\"{transform}>{stops}</{kind}Gradient>\
             </defs>\
             <rect width=\"100%\" height=\"100%\" fill=\"url('#{id}')\"/>\
             </svg>"
        ))
    }
}
