//! Perceptual light/dark classification
//!
//! Uses the ITU-R luma approximation `(r*299 + g*587 + b*114) / 1000` as a
//! fast brightness proxy, with no gamma correction. Colors above a
//! brightness of 125 read as light, everything else as dark.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{classify, to_rgb, ColorError, ColorFormat, Result};

/// Brightness threshold separating light from dark
const BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// Perceptual brightness class of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Light,
    Dark,
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contrast::Light => write!(f, "light"),
            Contrast::Dark => write!(f, "dark"),
        }
    }
}

/// Classify a color as perceptually light or dark
///
/// # Errors
///
/// Returns [`ColorError::UnrecognizedColorFormat`] for unclassifiable input
/// and for keyword colors, whose brightness cannot be assessed without a
/// keyword table.
pub fn contrast(input: &str) -> Result<Contrast> {
    let format = classify(input)?;
    if format == ColorFormat::Text {
        return Err(ColorError::unrecognized(input));
    }

    let rgb = to_rgb(input)?;
    let brightness = (f64::from(rgb.r) * 299.0
        + f64::from(rgb.g) * 587.0
        + f64::from(rgb.b) * 114.0)
        / 1000.0;

    if brightness > BRIGHTNESS_THRESHOLD {
        Ok(Contrast::Light)
    } else {
        Ok(Contrast::Dark)
    }
}
