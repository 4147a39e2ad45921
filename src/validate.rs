//! Structural validation for artwork submissions
//!
//! Checks palette shape, pixel-grid shape and index range, and canvas-size
//! policy. Everything here is a pure predicate over in-memory data; no
//! partial acceptance, any malformed element fails the whole check.

use crate::color::is_valid_color;
use crate::config::GalleryConfig;
use thiserror::Error;

/// Maximum number of palette entries an artwork may carry.
pub const MAX_PALETTE_LEN: usize = 256;

/// A structural validation failure, with enough detail for a
/// user-facing rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("palette must have between 1 and 256 colors, got {0}")]
    PaletteLength(usize),
    #[error("palette entry {index} ('{value}') is not a #RRGGBB color")]
    PaletteColor { index: usize, value: String },
    #[error("expected {expected} pixel rows, got {actual}")]
    RowCount { expected: u32, actual: usize },
    #[error("pixel row {row} has {actual} entries, expected {expected}")]
    RowLength { row: usize, expected: u32, actual: usize },
    #[error("pixel at ({x}, {y}) has index {index}, palette has {palette_len} colors")]
    IndexOutOfRange { x: usize, y: usize, index: u32, palette_len: usize },
    #[error("canvas size {size} is not allowed (allowed: {allowed})")]
    UnsupportedSize { size: u32, allowed: String },
}

/// Check a palette: 1-256 entries, each a well-formed `#RRGGBB` string.
pub fn check_palette(palette: &[String]) -> Result<(), ValidationError> {
    if palette.is_empty() || palette.len() > MAX_PALETTE_LEN {
        return Err(ValidationError::PaletteLength(palette.len()));
    }
    for (index, value) in palette.iter().enumerate() {
        if !is_valid_color(value) {
            return Err(ValidationError::PaletteColor {
                index,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Check a pixel grid: exactly `size` rows of `size` entries, every index
/// strictly below `palette_len`.
pub fn check_pixels(
    pixels: &[Vec<u32>],
    size: u32,
    palette_len: usize,
) -> Result<(), ValidationError> {
    if pixels.len() != size as usize {
        return Err(ValidationError::RowCount {
            expected: size,
            actual: pixels.len(),
        });
    }
    for (y, row) in pixels.iter().enumerate() {
        if row.len() != size as usize {
            return Err(ValidationError::RowLength {
                row: y,
                expected: size,
                actual: row.len(),
            });
        }
        for (x, &index) in row.iter().enumerate() {
            if index as usize >= palette_len {
                return Err(ValidationError::IndexOutOfRange {
                    x,
                    y,
                    index,
                    palette_len,
                });
            }
        }
    }
    Ok(())
}

/// Check a canvas size against the deployment's allowed-size policy.
pub fn check_size(size: u32, config: &GalleryConfig) -> Result<(), ValidationError> {
    if config.allows_size(size) {
        Ok(())
    } else {
        let allowed = config
            .canvas
            .sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ValidationError::UnsupportedSize { size, allowed })
    }
}

/// True iff the palette passes [`check_palette`].
pub fn palette_is_valid(palette: &[String]) -> bool {
    check_palette(palette).is_ok()
}

/// True iff the grid passes [`check_pixels`].
pub fn pixels_are_valid(pixels: &[Vec<u32>], size: u32, palette_len: usize) -> bool {
    check_pixels(pixels, size, palette_len).is_ok()
}

/// True iff the size passes [`check_size`].
pub fn size_is_valid(size: u32, config: &GalleryConfig) -> bool {
    check_size(size, config).is_ok()
}
