/*!
svgrad - syntactic CSS color validation and SVG gradient generation.

The library is a pure computation core with two entry points:

- [`is_css_color`] decides whether a string is syntactically plausible as a
  CSS color value, permissively enough to admit future notations.
- [`build_gradient`] validates an ordered color list and renders a complete
  SVG document with evenly spaced gradient stops.

All I/O, argument dispatch and exit-code handling live in the `svgrad`
binary (`cli.rs`); nothing in the library reads or writes anything.

# Architecture

- `color` - the syntactic validator and indexed batch validation
- `gradient` - orientation and gradient specification types
- `writer` - the `Writer` trait and the SVG document writer
- `presets` - named constant color lists for the CLI layer

# Example

```
use svgrad::{build_gradient, Orientation};

let svg = build_gradient(
    Orientation::Linear,
    vec!["#fff".to_string(), "#000".to_string()],
)?;
assert!(svg.contains("linearGradient"));
# Ok::<(), svgrad::SvgradError>(())
```
*/

pub mod color;
pub mod gradient;
pub mod presets;
pub mod writer;

pub use color::{invalid_entries, is_css_color, InvalidColor};
pub use gradient::{Gradient, Orientation, Stop};
pub use writer::{SvgWriter, Writer};

use thiserror::Error;

/// Crate version, surfaced by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors produced by the svgrad library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvgradError {
    /// One or more color tokens failed syntactic validation.
    ///
    /// Carries every failing (index, token) pair, not only the first, so
    /// callers can report exactly which inputs were rejected and where.
    #[error("invalid CSS colors: {}", render_entries(.0))]
    InvalidColors(Vec<InvalidColor>),
}

/// Convenience result type for svgrad operations.
pub type Result<T> = std::result::Result<T, SvgradError>;

fn render_entries(entries: &[InvalidColor]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| format!("{:?}", entries))
}

/// Validate every color and render a gradient document.
///
/// Thin wrapper over [`SvgWriter`]: validation is all-or-nothing, so either
/// a complete SVG document is returned or [`SvgradError::InvalidColors`]
/// enumerates every rejected token. No partial output.
pub fn build_gradient(orientation: Orientation, colors: Vec<String>) -> Result<String> {
    SvgWriter::new().write(&Gradient::new(orientation, colors))
}
