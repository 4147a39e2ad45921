//! HTML rendering of artworks
//!
//! Produces a standalone document showing the artwork as a CSS grid of
//! colored cells, sized with the same integer scale as the SVG renderer.

use crate::models::Artwork;
use crate::svg::{svg_scale, xml_escape};
use std::fmt::Write;

/// Render an artwork as a standalone HTML page.
///
/// One `div` cell per pixel with an inline background color; the header
/// names the title (placeholder when absent) and author. `image-rendering:
/// pixelated` keeps edges crisp if a browser scales the grid.
pub fn render_html(artwork: &Artwork) -> String {
    let scale = svg_scale(artwork.size);
    let title = xml_escape(artwork.display_title());
    let author = xml_escape(&artwork.author);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = write!(html, "<meta charset=\"utf-8\">\n<title>{title} by {author}</title>\n");
    let _ = write!(
        html,
        "<style>\n.art {{ display: grid; grid-template-columns: repeat({size}, {scale}px); width: {canvas}px; image-rendering: pixelated; }}\n.art div {{ width: {scale}px; height: {scale}px; }}\n</style>\n",
        size = artwork.size,
        canvas = artwork.size * scale,
    );
    html.push_str("</head>\n<body>\n");
    let _ = write!(html, "<h1>{title}</h1>\n<p>by {author}</p>\n");
    html.push_str("<div class=\"art\">\n");

    for (y, row) in artwork.pixels.iter().enumerate() {
        for (x, _) in row.iter().enumerate() {
            let color = artwork.resolved_color(x, y).unwrap_or("#000000");
            let _ = write!(html, "<div style=\"background:{color}\"></div>");
        }
        html.push('\n');
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork() -> Artwork {
        Artwork {
            id: "test".to_string(),
            author: "tester".to_string(),
            title: None,
            size: 2,
            palette: vec!["#112233".to_string(), "#FFFFFF".to_string()],
            pixels: vec![vec![0, 1], vec![1, 0]],
            created_at: 0,
            views: 0,
            remix_of: None,
        }
    }

    #[test]
    fn test_cell_count() {
        let html = render_html(&artwork());
        assert_eq!(html.matches("<div style=").count(), 4);
        assert_eq!(html.matches("background:#112233").count(), 2);
    }

    #[test]
    fn test_untitled_header() {
        let html = render_html(&artwork());
        assert!(html.contains("<h1>Untitled</h1>"));
        assert!(html.contains("<p>by tester</p>"));
    }

    #[test]
    fn test_grid_dimensions() {
        // size 2 -> scale 256, canvas 512
        let html = render_html(&artwork());
        assert!(html.contains("repeat(2, 256px)"));
        assert!(html.contains("width: 512px"));
    }

    #[test]
    fn test_quotes_escaped_like_svg() {
        let mut art = artwork();
        art.title = Some("it's \"art\"".to_string());
        let html = render_html(&art);
        assert!(html.contains("it&apos;s &quot;art&quot;"));
    }

    #[test]
    fn test_author_is_escaped() {
        let mut art = artwork();
        art.author = "<img onerror=x>".to_string();
        let html = render_html(&art);
        assert!(html.contains("&lt;img onerror=x&gt;"));
        assert!(!html.contains("<img onerror"));
    }
}
