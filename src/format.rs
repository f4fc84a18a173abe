//! Lexical classification of CSS color strings
//!
//! A color string is classified purely by its textual shape; no color-space
//! math happens here. The channel patterns are intentionally the same
//! hand-rolled digit-range alternations the library has always used, and
//! they are lenient: a handful of out-of-range three-digit values (256-299
//! for rgb channels, for example) slip through classification and are only
//! rejected later, when a conversion materializes the channels as integers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// Lexical format of a color string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// `#rgb` or `#rrggbb`
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)`
    Rgba,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)`
    Hsla,
    /// A keyword color such as `red`; not convertible to numeric channels
    Text,
}

/// `#` followed by exactly 3 or 6 hex digits
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(([A-Fa-f0-9]){3}|([A-Fa-f0-9]){6})$").expect("valid regex")
});

/// Three comma-separated channels, each matched by the lenient digit ranges
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgb\((((\d{1,2})|([0-1][0-9]{2})|([0-2][0-4][0-9])|([0-2][0-5][0-5])),){2}((\d{1,2})|([0-1][0-9]{2})|([0-2][0-4][0-9])|([0-2][0-5][0-5]))\)$",
    )
    .expect("valid regex")
});

/// Like rgb with a trailing alpha of `1` or `.x`/`0.x`/`0.xx` (a bare `0` is
/// not accepted)
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\((((\d{1,2})|([0-1][0-9]{2})|([0-2][0-4][0-9])|([0-2][0-5][0-5])),){3}((0?\.[0-9]{1,2})|(1))\)$",
    )
    .expect("valid regex")
});

/// Hue 0-360, saturation and lightness 0-100 percent
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsl\(((\d{1,2})|([0-2][0-9]\d)|([0-3][0-5]\d)|(360)),((\d{1,2})|(100))%,((\d{1,2})|(100))%\)$",
    )
    .expect("valid regex")
});

/// Like hsl with the same alpha shape as rgba
static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla\(((\d{1,2})|([0-2][0-9]\d)|([0-3][0-5]\d)|(360)),(((\d{1,2})|(100))%,){2}((0?\.[0-9]{1,2})|(1))\)$",
    )
    .expect("valid regex")
});

/// Keyword colors: ASCII letters only, not checked against a keyword list
static TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

/// Determine the lexical format of a color string
///
/// The formats are tested in a fixed priority order, first match wins:
/// hex (on the raw input), then rgb, rgba, hsl, hsla and keyword text on the
/// whitespace-stripped input.
///
/// # Errors
///
/// Returns [`ColorError::UnrecognizedColorFormat`] when the input matches
/// none of the six shapes (empty string, malformed punctuation, bare digit
/// strings, ...).
pub fn classify(input: &str) -> Result<ColorFormat> {
    if HEX_RE.is_match(input) {
        return Ok(ColorFormat::Hex);
    }

    let stripped = strip_whitespace(input);

    if RGB_RE.is_match(&stripped) {
        return Ok(ColorFormat::Rgb);
    }
    if RGBA_RE.is_match(&stripped) {
        return Ok(ColorFormat::Rgba);
    }
    if HSL_RE.is_match(&stripped) {
        return Ok(ColorFormat::Hsl);
    }
    if HSLA_RE.is_match(&stripped) {
        return Ok(ColorFormat::Hsla);
    }
    if TEXT_RE.is_match(&stripped) {
        return Ok(ColorFormat::Text);
    }

    log::warn!("color does not have a valid format (hex, rgb, rgba, hsl, hsla): {input}");
    Err(ColorError::unrecognized(input))
}

/// Remove all whitespace so `rgb( 51 , 102 , 153 )` and `rgb(51,102,153)`
/// classify and convert identically
pub(crate) fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hex() {
        assert_eq!(classify("#fff").unwrap(), ColorFormat::Hex);
        assert_eq!(classify("#336699").unwrap(), ColorFormat::Hex);
        assert_eq!(classify("#AbC123").unwrap(), ColorFormat::Hex);
    }

    #[test]
    fn test_classify_hex_rejects_wrong_lengths() {
        assert!(classify("#ff").is_err());
        assert!(classify("#ffff").is_err());
        assert!(classify("#1234567").is_err());
        assert!(classify("336699").is_err());
    }

    #[test]
    fn test_classify_rgb_and_rgba() {
        assert_eq!(classify("rgb(0,0,0)").unwrap(), ColorFormat::Rgb);
        assert_eq!(classify("rgb(51,102,153)").unwrap(), ColorFormat::Rgb);
        assert_eq!(classify("rgba(51,102,153,1)").unwrap(), ColorFormat::Rgba);
        assert_eq!(classify("rgba(51,102,153,0.25)").unwrap(), ColorFormat::Rgba);
        assert_eq!(classify("rgba(51,102,153,.5)").unwrap(), ColorFormat::Rgba);
    }

    #[test]
    fn test_classify_rgb_known_leniency() {
        // The digit-range alternation admits some out-of-range values; this
        // has always been classification behavior and conversions reject
        // them instead.
        assert_eq!(classify("rgb(255,255,255)").unwrap(), ColorFormat::Rgb);
        assert_eq!(classify("rgb(299,0,0)").unwrap(), ColorFormat::Rgb);
        assert!(classify("rgb(300,0,0)").is_err());
    }

    #[test]
    fn test_classify_rgba_alpha_shapes() {
        // bare 0 is not an accepted alpha, 1 and 1-2 digit fractions are
        assert!(classify("rgba(1,2,3,0)").is_err());
        assert!(classify("rgba(1,2,3,1)").is_ok());
        assert!(classify("rgba(1,2,3,0.5)").is_ok());
        assert!(classify("rgba(1,2,3,0.55)").is_ok());
        assert!(classify("rgba(1,2,3,0.555)").is_err());
        assert!(classify("rgba(1,2,3,1.5)").is_err());
    }

    #[test]
    fn test_classify_hsl_and_hsla() {
        assert_eq!(classify("hsl(0,0%,0%)").unwrap(), ColorFormat::Hsl);
        assert_eq!(classify("hsl(360,100%,50%)").unwrap(), ColorFormat::Hsl);
        assert_eq!(classify("hsla(210,50%,40%,1)").unwrap(), ColorFormat::Hsla);
        assert!(classify("hsl(361,0%,0%)").is_err());
        assert!(classify("hsl(0,101%,0%)").is_err());
        assert!(classify("hsl(0,0,0)").is_err());
    }

    #[test]
    fn test_classify_text_keywords() {
        assert_eq!(classify("red").unwrap(), ColorFormat::Text);
        assert_eq!(classify("rebeccapurple").unwrap(), ColorFormat::Text);
        // stray punctuation or digits disqualify a keyword
        assert!(classify("not-a-color-!!").is_err());
        assert!(classify("rgb(300,0,0 ").is_err());
    }

    #[test]
    fn test_classify_whitespace_stripped() {
        assert_eq!(
            classify("rgb( 51 , 102 , 153 )").unwrap(),
            classify("rgb(51,102,153)").unwrap()
        );
        assert_eq!(classify("hsla( 210, 50%, 40%, 1 )").unwrap(), ColorFormat::Hsla);
    }

    #[test]
    fn test_classify_is_total() {
        // No input panics; every input is one of the six formats or an error.
        for input in ["", "42", "#", "()", "rgb()", "rgba(1,2,3,)", "\u{1F4A9}", "  "] {
            let _ = classify(input);
        }
    }
}
