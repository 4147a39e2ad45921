//! Data models for gallery objects (artworks and submissions)

use serde::{Deserialize, Serialize};

/// A stored artwork: an indexed-color pixel grid plus its palette and
/// gallery metadata. Content is immutable after acceptance; only `views`
/// moves, and that mutation belongs to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Opaque unique identifier assigned at submission time.
    pub id: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    /// Canvas side length; the grid is always square.
    pub size: u32,
    /// Ordered colors referenced by index from `pixels`, each `#RRGGBB`.
    pub palette: Vec<String>,
    /// Row-major palette indices, `size` rows of `size` entries.
    pub pixels: Vec<Vec<u32>>,
    /// Unix epoch seconds.
    pub created_at: i64,
    pub views: u64,
    /// Id of the artwork this one remixes, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub remix_of: Option<String>,
}

impl Artwork {
    /// Resolve the color of the cell at `(x, y)` through this artwork's
    /// own palette. Returns `None` when the coordinate or index is out of
    /// range; validated artworks never hit that path.
    pub fn resolved_color(&self, x: usize, y: usize) -> Option<&str> {
        let index = *self.pixels.get(y)?.get(x)? as usize;
        self.palette.get(index).map(String::as_str)
    }

    /// Title to display, falling back to the placeholder for untitled work.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }
}

/// Placeholder title used in rendered output when a piece has none.
pub const UNTITLED: &str = "Untitled";

/// A client-submitted artwork, before the gallery assigns identity.
///
/// `id`, `created_at` and `views` do not exist yet; they are minted by the
/// service when the submission passes validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkSubmission {
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub size: u32,
    pub palette: Vec<String>,
    pub pixels: Vec<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub remix_of: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Artwork {
        Artwork {
            id: "a1b2c3d4e5f6".to_string(),
            author: "ada".to_string(),
            title: Some("checker".to_string()),
            size: 2,
            palette: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            pixels: vec![vec![0, 1], vec![1, 0]],
            created_at: 1_700_000_000,
            views: 0,
            remix_of: None,
        }
    }

    #[test]
    fn test_artwork_roundtrip() {
        let art = checker();
        let json = serde_json::to_string(&art).unwrap();
        let parsed: Artwork = serde_json::from_str(&json).unwrap();
        assert_eq!(art, parsed);
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let mut art = checker();
        art.title = None;
        let json = serde_json::to_string(&art).unwrap();
        assert!(!json.contains("title"));
        assert!(!json.contains("remix_of"));
    }

    #[test]
    fn test_submission_fixture() {
        let json = r##"{"author": "bob", "size": 2, "palette": ["#FF0000"], "pixels": [[0, 0], [0, 0]]}"##;
        let sub: ArtworkSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(sub.author, "bob");
        assert!(sub.title.is_none());
        assert!(sub.remix_of.is_none());
        assert_eq!(sub.pixels.len(), 2);
    }

    #[test]
    fn test_negative_index_rejected_at_parse() {
        let json = r##"{"author": "bob", "size": 1, "palette": ["#FF0000"], "pixels": [[-1]]}"##;
        assert!(serde_json::from_str::<ArtworkSubmission>(json).is_err());
    }

    #[test]
    fn test_resolved_color() {
        let art = checker();
        assert_eq!(art.resolved_color(0, 0), Some("#000000"));
        assert_eq!(art.resolved_color(1, 0), Some("#FFFFFF"));
        assert_eq!(art.resolved_color(2, 0), None);
    }

    #[test]
    fn test_display_title_placeholder() {
        let mut art = checker();
        assert_eq!(art.display_title(), "checker");
        art.title = None;
        assert_eq!(art.display_title(), UNTITLED);
    }
}
