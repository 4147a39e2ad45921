//! Color parsing utilities for palette entries
//!
//! Gallery palettes are restricted to exactly one format: `#RRGGBB`
//! (6 hex digits, case-insensitive). Shorthand hex, alpha channels and
//! CSS functional notation are all rejected.

use image::Rgba;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be exactly 6 hex chars after #)
    #[error("invalid color length {0}, expected 6 hex digits")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a `#RRGGBB` color string into an RGBA color (alpha always 255).
///
/// # Examples
///
/// ```
/// use pixelgallery::color::parse_color;
///
/// let red = parse_color("#FF0000").unwrap();
/// assert_eq!(red, image::Rgba([255, 0, 0, 255]));
///
/// // Lowercase hex is accepted
/// let teal = parse_color("#00aabb").unwrap();
/// assert_eq!(teal, image::Rgba([0, 170, 187, 255]));
///
/// // Shorthand is not
/// assert!(parse_color("#F00").is_err());
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, lacks the leading `#`,
/// has a length other than 6 hex digits, or contains a non-hex character.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    // Validate every char is ASCII hex before any byte slicing; multi-byte
    // input must fail cleanly, not split mid-character.
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }
    if hex.len() != 6 {
        return Err(ColorError::InvalidLength(hex.len()));
    }

    let r = parse_hex_pair(&hex[0..2])?;
    let g = parse_hex_pair(&hex[2..4])?;
    let b = parse_hex_pair(&hex[4..6])?;
    Ok(Rgba([r, g, b, 255]))
}

/// Returns true iff `s` is a well-formed `#RRGGBB` color string.
pub fn is_valid_color(s: &str) -> bool {
    parse_color(s).is_ok()
}

/// Perceived brightness of a color in `[0.0, 1.0]`.
///
/// Computed as the plain channel average `(R + G + B) / (3 * 255)`;
/// `#000000` maps to 0.0 and `#FFFFFF` to 1.0.
pub fn brightness(rgba: Rgba<u8>) -> f64 {
    let sum = rgba[0] as f64 + rgba[1] as f64 + rgba[2] as f64;
    sum / (3.0 * 255.0)
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(chars.next().ok_or(ColorError::Empty)?)?;
    let low = parse_hex_digit(chars.next().ok_or(ColorError::Empty)?)?;
    Ok(high * 16 + low)
}
