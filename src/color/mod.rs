//! Syntactic CSS color validation.
//!
//! The validator decides whether a string is *plausible* as a CSS color
//! value. It is deliberately permissive: any bare alphabetic word passes
//! (no named-color table is consulted), and functional notation accepts
//! unknown function names and argument keywords so that future CSS color
//! syntax keeps validating. It is purely lexical - no color-space or range
//! checking happens here.
//!
//! Matching is case-insensitive and ignores surrounding whitespace. The
//! whole (trimmed) string must match; partial matches are rejected.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Regex for a potentially valid CSS color.
///
/// Three shapes, any one accepts. Input is lower-cased before matching, so
/// the pattern only needs lowercase classes.
///
/// Source:
/// ```regex
/// HEX   = #([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})
/// TOKEN = [0-9a-z.,%/-]+
/// ARGS  = \s*(TOKEN\s*)+
/// ^(?:HEX|[a-z]+(\(ARGS\))?)$
/// ```
///
/// The argument grammar is a flat character class rather than a per-notation
/// rule: digits, letters, `.`, `,`, `%`, `/`, `-` and whitespace cover the
/// legacy comma syntax, the modern space/slash syntax, keyword arguments
/// (`rgb(from red r g b)`) and dashed idents (`color(display-p3 ...)`).
/// At least one argument token is required, so empty calls like `fn()` are
/// rejected. No space is allowed between the function name and `(`.
static CSS_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})|[a-z]+(?:\(\s*(?:[0-9a-z.,%/-]+\s*)+\))?)$",
    )
    .expect("valid regex")
});

/// Check whether `input` is syntactically plausible as a CSS color.
///
/// Surrounding whitespace and letter case never affect the verdict;
/// whitespace *inside* a functional argument list (newlines included) is
/// part of the accepted grammar. The matcher keeps no state between calls.
pub fn is_css_color(input: &str) -> bool {
    CSS_COLOR.is_match(&input.trim().to_lowercase())
}

/// A color token that failed validation, with its position in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidColor {
    /// Zero-based position in the submitted color list.
    pub index: usize,
    /// The offending token, exactly as submitted.
    pub token: String,
}

/// Collect every invalid token from `colors` with its original index.
///
/// Positions are preserved so error messages can point at *which* inputs
/// failed, not merely that something did.
pub fn invalid_entries(colors: &[String]) -> Vec<InvalidColor> {
    colors
        .iter()
        .enumerate()
        .filter(|(_, token)| !is_css_color(token))
        .map(|(index, token)| InvalidColor {
            index,
            token: token.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_invalid() {
        assert!(!is_css_color(""));
        assert!(!is_css_color("   "));
        assert!(!is_css_color("\n\t"));
    }

    #[test]
    fn test_bare_words_valid() {
        assert!(is_css_color("red"));
        assert!(is_css_color(" RED "));
        assert!(is_css_color("Red "));
        // no named-color table: nonsense words pass on purpose
        assert!(is_css_color(" amogus "));
        assert!(is_css_color("mogus"));
    }

    #[test]
    fn test_non_alphabetic_words_invalid() {
        assert!(!is_css_color("café"));
        assert!(!is_css_color("🌈"));
        assert!(!is_css_color("dark grey"));
    }

    #[test]
    fn test_hex_lengths() {
        assert!(!is_css_color("#"));
        assert!(!is_css_color("#f"));
        assert!(!is_css_color("#ff"));
        assert!(is_css_color("#ff7"));
        assert!(is_css_color("#ff70"));
        assert!(!is_css_color("#ff700"));
        assert!(is_css_color("#000000"));
        assert!(!is_css_color("#0000000"));
        assert!(is_css_color("#00000000"));
        assert!(!is_css_color("#000000000"));
    }

    #[test]
    fn test_hex_digits_and_case() {
        assert!(is_css_color("#AbCdEf"));
        assert!(!is_css_color("#yyy"));
        assert!(!is_css_color("#12g"));
    }

    #[test]
    fn test_functional_paren_placement() {
        assert!(is_css_color("bruh(hey)"));
        assert!(is_css_color("bruh(0)"));
        // space before the opening paren is a syntax error
        assert!(!is_css_color("bruh (hey)"));
        assert!(!is_css_color("bruh 0)"));
        // unmatched parens
        assert!(!is_css_color("bruh(0"));
        assert!(!is_css_color("bruh0)"));
    }

    #[test]
    fn test_functional_separators() {
        assert!(is_css_color("rgb(0,0,0)"));
        assert!(is_css_color("bruh(0%, 0%, 0%)"));
        assert!(is_css_color("bruh(0deg 0rad 0grad)"));
        assert!(is_css_color("rgb(0 0 0 / 50%)"));
        assert!(is_css_color("hsl(120deg, 100%, 50%)"));
        assert!(is_css_color("rgba(255, 0, 0, 0.5)"));
    }

    #[test]
    fn test_modern_color_notations() {
        assert!(is_css_color("rgb(from red r g b)"));
        assert!(is_css_color("color(display-p3 1 0.5 0)"));
        assert!(is_css_color("oklch(0.7 0.1 200)"));
        assert!(is_css_color("lab(52.2% 40.2 59.2)"));
    }

    #[test]
    fn test_rejects_empty_argument_list() {
        // decided behavior: a call with no arguments is not a color
        assert!(!is_css_color("fn()"));
        assert!(!is_css_color("rgb()"));
        assert!(!is_css_color("rgb(   )"));
    }

    #[test]
    fn test_accepts_internal_whitespace() {
        // decided behavior: whitespace between arguments may be any
        // whitespace, newlines and tabs included
        assert!(is_css_color("rgb(0,\n0, 0)"));
        assert!(is_css_color("rgb(0\t0\t0)"));
        assert!(is_css_color("rgb(\n  0 0 0\n)"));
    }

    #[test]
    fn test_no_quotes_or_markup() {
        assert!(!is_css_color("url('#g')"));
        assert!(!is_css_color("red\" onload=\"alert(1)"));
        assert!(!is_css_color("<script>"));
    }

    #[test]
    fn test_partial_matches_rejected() {
        assert!(!is_css_color("red blue"));
        assert!(!is_css_color("#fff;"));
        assert!(!is_css_color("rgb(0,0,0) extra"));
    }

    #[test]
    fn test_idempotent() {
        for input in ["red", "#ff7", "rgb(0,0,0)", "", "bruh(0"] {
            assert_eq!(is_css_color(input), is_css_color(input));
        }
    }

    #[test]
    fn test_invalid_entries_preserves_positions() {
        let colors = vec![
            "red".to_string(),
            "#ff".to_string(),
            "blue".to_string(),
            "#ff700".to_string(),
        ];
        let entries = invalid_entries(&colors);

        assert_eq!(
            entries,
            vec![
                InvalidColor {
                    index: 1,
                    token: "#ff".to_string()
                },
                InvalidColor {
                    index: 3,
                    token: "#ff700".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_entries_empty_for_valid_list() {
        let colors = vec!["#fff".to_string(), "black".to_string()];
        assert!(invalid_entries(&colors).is_empty());
    }
}
