//! # colorfmt
//!
//! A small library for classifying and converting CSS color strings.
//!
//! Six lexical formats are recognized: hexadecimal (`#abc`, `#aabbcc`),
//! `rgb(..)`, `rgba(..)`, `hsl(..)`, `hsla(..)` and keyword text such as
//! `"red"`. Keywords classify but cannot be converted; there is no keyword
//! table. Every function is pure: no shared state, no I/O, deterministic
//! for identical input.
//!
//! ## Example
//!
//! ```rust
//! use colorfmt::{classify, contrast, to_hex, to_rgb, ColorFormat, Contrast};
//!
//! assert_eq!(classify("rgb(51,102,153)")?, ColorFormat::Rgb);
//! assert_eq!(to_hex("rgb(51,102,153)")?, "#336699");
//! assert_eq!(to_rgb("#abc")?.r, 170);
//! assert_eq!(contrast("#ffffff")?, Contrast::Light);
//! # Ok::<(), colorfmt::ColorError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod contrast;
pub mod convert;
pub mod error;
pub mod format;

pub use contrast::{contrast, Contrast};
pub use convert::{to_hex, to_hsl, to_hsla, to_rgb, to_rgba};
pub use error::{ColorError, Result};
pub use format::{classify, ColorFormat};

pub(crate) use format::strip_whitespace;

/// An rgb channel triple, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// An hsl triple: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_display() {
        let rgb = Rgb { r: 51, g: 102, b: 153 };
        assert_eq!(rgb.to_string(), "rgb(51,102,153)");
    }

    #[test]
    fn test_hsl_display() {
        let hsl = Hsl { h: 210, s: 50, l: 40 };
        assert_eq!(hsl.to_string(), "hsl(210,50%,40%)");
    }

    #[test]
    fn test_public_types_serialize() {
        let rgb = Rgb { r: 1, g: 2, b: 3 };
        let json = serde_json::to_string(&rgb).unwrap();
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(rgb, back);

        let json = serde_json::to_string(&ColorFormat::Hsla).unwrap();
        let back: ColorFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorFormat::Hsla);

        assert_eq!(serde_json::to_string(&Contrast::Light).unwrap(), "\"light\"");
    }
}
