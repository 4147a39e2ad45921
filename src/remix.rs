//! Remix comparison and change-ratio policy
//!
//! A remix may change at most half of the original's pixels, and must
//! change at least one. Cells are compared by *resolved color* (index
//! looked up in each artwork's own palette), never by raw index: a remix
//! is free to reorder or extend the palette, so equal indices can name
//! different colors and different indices the same color.

use crate::color::parse_color;
use image::Rgba;
use thiserror::Error;

/// Outcome of comparing a remix candidate against its original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemixAnalysis {
    /// Number of cells whose resolved color differs.
    pub changed: usize,
    /// Largest accepted change count: `floor(size * size / 2)`.
    pub max_allowed: usize,
}

impl RemixAnalysis {
    /// Apply the remix policy to this comparison.
    pub fn check(&self) -> Result<(), RemixPolicyError> {
        if self.changed == 0 {
            return Err(RemixPolicyError::NoChanges);
        }
        if self.changed > self.max_allowed {
            return Err(RemixPolicyError::TooManyChanges {
                changed: self.changed,
                max_allowed: self.max_allowed,
            });
        }
        Ok(())
    }
}

/// A remix rejected by the change-ratio policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemixPolicyError {
    /// Identical resolved colors everywhere; a remix must alter something.
    #[error("remix changes no pixels; at least one pixel must differ from the original")]
    NoChanges,
    /// More than half the canvas was repainted.
    #[error("remix changes {changed} pixels, more than the allowed maximum of {max_allowed}")]
    TooManyChanges { changed: usize, max_allowed: usize },
}

/// Count the cells whose resolved color differs between an original and a
/// candidate grid of side `size`.
///
/// Both inputs are expected to have passed structural validation; cells
/// that cannot be resolved (short row, index past the palette) compare as
/// unresolved and count as changed only if the other side resolves.
pub fn change_ratio(
    original_palette: &[String],
    original_pixels: &[Vec<u32>],
    new_palette: &[String],
    new_pixels: &[Vec<u32>],
    size: u32,
) -> RemixAnalysis {
    let side = size as usize;
    let mut changed = 0;

    for y in 0..side {
        for x in 0..side {
            let before = resolve(original_palette, original_pixels, x, y);
            let after = resolve(new_palette, new_pixels, x, y);
            if before != after {
                changed += 1;
            }
        }
    }

    RemixAnalysis {
        changed,
        max_allowed: side * side / 2,
    }
}

/// Resolve one cell to its RGBA color through the grid's own palette.
fn resolve(palette: &[String], pixels: &[Vec<u32>], x: usize, y: usize) -> Option<Rgba<u8>> {
    let index = *pixels.get(y)?.get(x)? as usize;
    let hex = palette.get(index)?;
    parse_color(hex).ok()
}
