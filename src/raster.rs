//! PNG rendering and output
//!
//! Rasterizes an artwork to an RGBA buffer, with integer nearest-neighbor
//! scaling to keep pixel edges crisp.

use crate::color::parse_color;
use crate::models::Artwork;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;

/// Error type for raster output operations
#[derive(Debug, Error)]
pub enum RasterError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Fallback fill for cells that cannot be resolved. Validated artworks
/// never produce it.
const FALLBACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Rasterize an artwork at one pixel per cell.
pub fn render_image(artwork: &Artwork) -> RgbaImage {
    let resolved: Vec<Rgba<u8>> = artwork
        .palette
        .iter()
        .map(|hex| parse_color(hex).unwrap_or(FALLBACK))
        .collect();

    let side = artwork.size;
    let mut image = RgbaImage::new(side, side);
    for (y, row) in artwork.pixels.iter().enumerate().take(side as usize) {
        for (x, &index) in row.iter().enumerate().take(side as usize) {
            let color = resolved.get(index as usize).copied().unwrap_or(FALLBACK);
            image.put_pixel(x as u32, y as u32, color);
        }
    }
    image
}

/// Scale an image by an integer factor using nearest-neighbor
/// interpolation. Factor 1 returns the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor, h * factor, FilterType::Nearest)
}

/// Save an RGBA image to a PNG file, creating parent directories as
/// needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), RasterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}
