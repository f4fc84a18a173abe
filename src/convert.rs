//! Conversions between CSS color string formats
//!
//! Every entry point classifies its input first and fails with
//! [`ColorError::UnrecognizedColorFormat`] if classification fails or the
//! input is a keyword color. Conversions that cross color spaces route
//! through an explicit intermediate step (rgba drops its alpha by going
//! through hex, hsl input goes through rgb) and return early when any stage
//! fails.
//!
//! Integer channels are produced with round-half-away-from-zero semantics at
//! every stage, so an rgb -> hsl -> rgb round trip may drift by one unit per
//! channel.

use crate::{classify, strip_whitespace, ColorError, ColorFormat, Hsl, Result, Rgb};

/// Convert a color string to its rgb channel triple
///
/// Alpha-bearing input (rgba) is normalized through the hex pathway, which
/// silently discards the alpha channel. Keyword colors fail: there is no
/// keyword table to resolve them against.
///
/// # Errors
///
/// Returns [`ColorError::UnrecognizedColorFormat`] for unclassifiable input,
/// keyword colors, and channel values that classification admitted but do
/// not fit in 0-255.
pub fn to_rgb(input: &str) -> Result<Rgb> {
    let format = classify(input)?;
    let color = strip_whitespace(input);

    match format {
        ColorFormat::Rgb => parse_rgb_body(&color, input),
        ColorFormat::Rgba => {
            // alpha is dropped by normalizing through hex first
            let hex = to_hex(input)?;
            parse_hex(&hex, input)
        }
        ColorFormat::Hex => parse_hex(&color, input),
        ColorFormat::Hsl | ColorFormat::Hsla => {
            let (h, s, l) = parse_hsl_body(&color, input)?;
            Ok(hsl_to_rgb(h, s, l))
        }
        ColorFormat::Text => Err(ColorError::unrecognized(input)),
    }
}

/// Convert a color string to an `rgba(r,g,b,a)` string
///
/// An rgba input passes through unchanged with its own alpha; the `alpha`
/// argument is ignored in that case. For every other format the rgb channels
/// are emitted with the supplied alpha, where `None` and `0.0` both default
/// to fully opaque.
pub fn to_rgba(input: &str, alpha: Option<f64>) -> Result<String> {
    let format = classify(input)?;
    let color = strip_whitespace(input);

    if format == ColorFormat::Rgba {
        return Ok(color);
    }

    let alpha = alpha.filter(|a| *a != 0.0).unwrap_or(1.0);

    let rgb = match format {
        ColorFormat::Rgb => {
            // like rgba -> rgb, the plain-rgb path is normalized through hex
            let hex = to_hex(input)?;
            parse_hex(&hex, input)?
        }
        ColorFormat::Hex => parse_hex(&color, input)?,
        ColorFormat::Hsl | ColorFormat::Hsla => {
            let (h, s, l) = parse_hsl_body(&color, input)?;
            hsl_to_rgb(h, s, l)
        }
        ColorFormat::Rgba | ColorFormat::Text => {
            return Err(ColorError::unrecognized(input));
        }
    };

    Ok(format!("rgba({},{},{},{})", rgb.r, rgb.g, rgb.b, alpha))
}

/// Convert a color string to an `hsl(h,s%,l%)` string
///
/// Hsl input passes through unchanged. Everything else (including hsla,
/// which loses its alpha) is normalized to rgb first and then mapped with
/// the max/min piecewise formula.
pub fn to_hsl(input: &str) -> Result<String> {
    let format = classify(input)?;
    if format == ColorFormat::Hsl {
        return Ok(strip_whitespace(input));
    }

    let hsl = rgb_to_hsl(to_rgb(input)?);
    Ok(hsl.to_string())
}

/// Convert a color string to an `hsla(h,s%,l%,a)` string
///
/// Hsla input passes through unchanged with its embedded alpha. For other
/// formats the hsl components come from the rgb normalization and the alpha
/// argument applies, with `None` and `0.0` defaulting to fully opaque.
pub fn to_hsla(input: &str, alpha: Option<f64>) -> Result<String> {
    let format = classify(input)?;
    if format == ColorFormat::Hsla {
        return Ok(strip_whitespace(input));
    }

    let alpha = alpha.filter(|a| *a != 0.0).unwrap_or(1.0);
    let hsl = rgb_to_hsl(to_rgb(input)?);
    Ok(format!("hsla({},{}%,{}%,{})", hsl.h, hsl.s, hsl.l, alpha))
}

/// Convert a color string to a lowercase `#rrggbb` string
///
/// Hex input passes through unchanged. Rgb and rgba channels are read in
/// place (rgba's alpha is discarded); hsl and hsla normalize through
/// [`to_rgb`] first.
pub fn to_hex(input: &str) -> Result<String> {
    let format = classify(input)?;
    let color = strip_whitespace(input);

    let rgb = match format {
        ColorFormat::Hex => return Ok(color),
        ColorFormat::Rgb | ColorFormat::Rgba => parse_rgb_body(&color, input)?,
        _ => to_rgb(input)?,
    };

    Ok(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
}

/// Split `name(a,b,c)` into its comma-separated body fields
fn body_fields<'a>(color: &'a str, original: &str) -> Result<Vec<&'a str>> {
    let body = color
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(body, _)| body)
        .ok_or_else(|| ColorError::unrecognized(original))?;
    Ok(body.split(',').collect())
}

/// Parse the leading three integer channels of an rgb/rgba body
fn parse_rgb_body(color: &str, original: &str) -> Result<Rgb> {
    let fields = body_fields(color, original)?;
    if fields.len() < 3 {
        return Err(ColorError::unrecognized(original));
    }

    let channel = |field: &str| -> Result<u8> {
        field
            .parse::<u8>()
            .map_err(|_| ColorError::unrecognized(original))
    };

    Ok(Rgb {
        r: channel(fields[0])?,
        g: channel(fields[1])?,
        b: channel(fields[2])?,
    })
}

/// Parse hue, saturation and lightness from an hsl/hsla body
fn parse_hsl_body(color: &str, original: &str) -> Result<(u16, u8, u8)> {
    let fields = body_fields(color, original)?;
    if fields.len() < 3 {
        return Err(ColorError::unrecognized(original));
    }

    let h = fields[0]
        .parse::<u16>()
        .map_err(|_| ColorError::unrecognized(original))?;
    let percent = |field: &str| -> Result<u8> {
        field
            .trim_end_matches('%')
            .parse::<u8>()
            .map_err(|_| ColorError::unrecognized(original))
    };

    Ok((h, percent(fields[1])?, percent(fields[2])?))
}

/// Parse a hex color, expanding `#abc` shorthand by duplicating each nibble
fn parse_hex(color: &str, original: &str) -> Result<Rgb> {
    let digits = color.trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    if expanded.len() != 6 {
        return Err(ColorError::unrecognized(original));
    }

    let pair = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&expanded[range], 16).map_err(|_| ColorError::unrecognized(original))
    };

    Ok(Rgb {
        r: pair(0..2)?,
        g: pair(2..4)?,
        b: pair(4..6)?,
    })
}

/// Standard hsl -> rgb mapping over six hue segments
fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let s = f64::from(s) / 100.0;
    let l = f64::from(l) / 100.0;

    // achromatic: hue is undefined and all channels equal
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;
    let hue = f64::from(h) / 360.0;

    Rgb {
        r: hue_to_channel(m1, m2, hue + 1.0 / 3.0).round() as u8,
        g: hue_to_channel(m1, m2, hue).round() as u8,
        b: hue_to_channel(m1, m2, hue - 1.0 / 3.0).round() as u8,
    }
}

/// Evaluate one rgb channel at a hue fraction, wrapping the fraction into
/// [0,1] and interpolating across the six 60-degree segments
fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };

    let v = if 6.0 * hue < 1.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if 2.0 * hue < 1.0 {
        m2
    } else if 3.0 * hue < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    };

    255.0 * v
}

/// Standard rgb -> hsl mapping, with the historical negative-hue correction
///
/// A negative computed hue is reflected (`360 - |h|`), not wrapped modulo
/// 360. The two differ, and the reflected form is the long-standing output
/// of this library.
fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = (max + min) / 2.0;
    let mut s = 0.0;
    let mut h = 0.0;

    if max != min {
        s = if l < 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };

        h = if r == max {
            (g - b) / (max - min)
        } else if g == max {
            2.0 + (b - r) / (max - min)
        } else {
            4.0 + (r - g) / (max - min)
        };
    }

    let mut h = (h * 60.0).round() as i32;
    let s = (s * 100.0).round() as u8;
    let l = (l * 100.0).round() as u8;

    if h < 0 {
        h = 360 - (-h);
    }

    Hsl {
        h: h as u16,
        s,
        l,
    }
}
