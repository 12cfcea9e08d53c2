//! Gradient specification types.
//!
//! A [`Gradient`] is an orientation plus an ordered list of color tokens.
//! Stops are never stored: they are derived at render time from each
//! token's index and the total count, so the specification stays immutable
//! once built.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gradient orientation, selecting the SVG gradient element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Vertical linear gradient (the writer adds a 90 degree rotation so
    /// the axis runs top to bottom rather than the SVG default).
    #[default]
    #[value(alias = "l")]
    Linear,
    /// Radial gradient from the center outwards.
    #[value(alias = "r")]
    Radial,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Linear => write!(f, "linear"),
            Orientation::Radial => write!(f, "radial"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "linear" => Ok(Self::Linear),
            "r" | "radial" => Ok(Self::Radial),
            other => Err(format!("unknown orientation: {}", other)),
        }
    }
}

/// An ordered gradient specification.
///
/// Sequence order is significant - it alone determines stop offsets. No
/// deduplication happens; repeated colors are legal. Tokens are kept as
/// submitted and trimmed only when embedded into markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub orientation: Orientation,
    pub colors: Vec<String>,
}

impl Gradient {
    /// Create a gradient specification from an ordered color list.
    pub fn new(orientation: Orientation, colors: Vec<String>) -> Self {
        Self {
            orientation,
            colors,
        }
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the gradient has no stops. An empty gradient is legal and
    /// renders as a document with an empty gradient definition.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Derive the stops: evenly spaced offsets over 0..=100%.
    ///
    /// Stop `i` of `n` sits at `i / max(n - 1, 1) * 100` percent. The
    /// denominator collapses to 1 (not 0) for a single-color list, placing
    /// its one stop at 0%.
    pub fn stops(&self) -> impl Iterator<Item = Stop<'_>> {
        let denominator = self.colors.len().saturating_sub(1).max(1);
        self.colors.iter().enumerate().map(move |(index, color)| Stop {
            index,
            color: color.trim(),
            offset: index as f64 / denominator as f64 * 100.0,
        })
    }
}

/// A derived gradient stop: position along the axis plus the color to
/// place there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop<'a> {
    /// Zero-based position in the color list.
    pub index: usize,
    /// The color token, trimmed of surrounding whitespace.
    pub color: &'a str,
    /// Offset along the gradient axis, in percent.
    pub offset: f64,
}
