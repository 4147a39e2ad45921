//! ASCII rendering of artworks
//!
//! Maps each pixel's resolved color to a character on a fixed density
//! ramp by brightness. Lossy by construction: many colors share a ramp
//! bucket. Output is deterministic for a given artwork.

use crate::color::{brightness, parse_color};
use crate::models::Artwork;

/// Density ramp from emptiest to fullest.
pub const DENSITY_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Character used for cells that cannot be resolved. Validated artworks
/// never produce it.
const UNRESOLVED: char = '?';

/// Map a brightness in `[0.0, 1.0]` to a ramp index.
///
/// `floor(b * (ramp_len - 1))`, so only full white reaches the last
/// character.
pub fn ramp_index(b: f64) -> usize {
    let clamped = b.clamp(0.0, 1.0);
    (clamped * (DENSITY_RAMP.len() - 1) as f64).floor() as usize
}

/// Render an artwork as monospace text: `size` lines of `size`
/// characters, rows joined by `\n`.
///
/// # Examples
///
/// ```
/// use pixelgallery::ascii::render_ascii;
/// use pixelgallery::models::Artwork;
///
/// let art = Artwork {
///     id: "x".to_string(),
///     author: "ada".to_string(),
///     title: None,
///     size: 2,
///     palette: vec!["#000000".to_string(), "#FFFFFF".to_string()],
///     pixels: vec![vec![0, 1], vec![1, 0]],
///     created_at: 0,
///     views: 0,
///     remix_of: None,
/// };
/// assert_eq!(render_ascii(&art), " @\n@ ");
/// ```
pub fn render_ascii(artwork: &Artwork) -> String {
    // One ramp character per palette entry, computed up front.
    let ramp_chars: Vec<char> = artwork
        .palette
        .iter()
        .map(|hex| match parse_color(hex) {
            Ok(rgba) => DENSITY_RAMP[ramp_index(brightness(rgba))],
            Err(_) => UNRESOLVED,
        })
        .collect();

    let mut lines = Vec::with_capacity(artwork.pixels.len());
    for row in &artwork.pixels {
        let line: String = row
            .iter()
            .map(|&index| *ramp_chars.get(index as usize).unwrap_or(&UNRESOLVED))
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(size: u32, palette: Vec<&str>, pixels: Vec<Vec<u32>>) -> Artwork {
        Artwork {
            id: "test".to_string(),
            author: "tester".to_string(),
            title: None,
            size,
            palette: palette.into_iter().map(String::from).collect(),
            pixels,
            created_at: 0,
            views: 0,
            remix_of: None,
        }
    }

    #[test]
    fn test_ramp_index_endpoints() {
        assert_eq!(ramp_index(0.0), 0);
        assert_eq!(ramp_index(1.0), 9);
    }

    #[test]
    fn test_ramp_index_buckets() {
        // Just below a bucket boundary stays in the lower bucket
        assert_eq!(ramp_index(0.11), 0);
        assert_eq!(ramp_index(0.12), 1);
        assert_eq!(ramp_index(0.5), 4);
        assert_eq!(ramp_index(0.99), 8);
    }

    #[test]
    fn test_checkerboard_scenario() {
        let art = artwork(
            2,
            vec!["#000000", "#FFFFFF"],
            vec![vec![0, 1], vec![1, 0]],
        );
        assert_eq!(render_ascii(&art), " @\n@ ");
    }

    #[test]
    fn test_output_shape() {
        let art = artwork(8, vec!["#808080"], vec![vec![0; 8]; 8]);
        let text = render_ascii(&art);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 8);
        for line in lines {
            assert_eq!(line.chars().count(), 8);
        }
    }

    #[test]
    fn test_deterministic() {
        let art = artwork(
            4,
            vec!["#112233", "#FFEEDD", "#778899"],
            vec![
                vec![0, 1, 2, 0],
                vec![1, 2, 0, 1],
                vec![2, 0, 1, 2],
                vec![0, 1, 2, 0],
            ],
        );
        assert_eq!(render_ascii(&art), render_ascii(&art));
    }

    #[test]
    fn test_mid_gray_bucket() {
        // #808080 -> brightness 128/255 ~ 0.502 -> floor(0.502 * 9) = 4 -> '='
        let art = artwork(1, vec!["#808080"], vec![vec![0]]);
        assert_eq!(render_ascii(&art), "=");
    }
}
