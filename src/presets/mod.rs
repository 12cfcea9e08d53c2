//! Named gradient presets.
//!
//! Fixed, ordered color lists resolvable by name, constructed once at
//! compile time and never mutated. Only the CLI layer consults these
//! tables; the validator and writers never read them.

/// Grayscale, white to black.
pub const WB: &[&str] = &["#fff", "#000"];

/// RYGCBM as CSS hex colors.
pub const RAINBOW: &[&str] = &["#f00", "#ff0", "#0f0", "#0ff", "#00f", "#f0f"];

/// Red, green, blue.
pub const RGB: &[&str] = &["#f00", "#0f0", "#00f"];

/// Like a skybox.
pub const SKY: &[&str] = &["#00e", "#07e", "#0ff"];

/// Linux Mint.
pub const MINT: &[&str] = &["#fff", "#0e1"];

/// Black through embers to white.
pub const FIRE: &[&str] = &["#000", "#700", "#f70", "#ff0", "#fff"];

/// All preset names, in listing order.
pub const NAMES: &[&str] = &["wb", "rainbow", "rgb", "sky", "mint", "fire"];

/// Resolve a preset name to its color list.
///
/// An explicit key-present lookup: unknown names return `None`, nothing
/// falls back to a default. `rainbow` and `fire` also answer to their
/// emoji spellings.
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "wb" => Some(WB),
        "rainbow" | "🌈" => Some(RAINBOW),
        "rgb" => Some(RGB),
        "sky" => Some(SKY),
        "mint" => Some(MINT),
        "fire" | "🔥" => Some(FIRE),
        _ => None,
    }
}
