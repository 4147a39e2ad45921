//! SVG rendering of artworks
//!
//! Emits a square vector document with one filled rectangle per pixel.
//! Rectangles tile the canvas exactly: integer scale, no gaps, no
//! overlaps, no anti-aliasing hints.

use crate::models::Artwork;
use std::fmt::Write;

/// Target maximum output dimension in SVG user units.
pub const SVG_MAX_DIM: u32 = 512;

/// Integer per-pixel scale for a canvas of side `size`:
/// `max(1, floor(512 / size))`.
pub fn svg_scale(size: u32) -> u32 {
    if size == 0 {
        return 1;
    }
    (SVG_MAX_DIM / size).max(1)
}

/// Escape text for use in XML/HTML content and attribute values. Also
/// used by the HTML renderer; all five entities are valid in HTML5.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an artwork as a standalone SVG document.
///
/// Canvas side is `size * svg_scale(size)`; each pixel becomes a
/// `<rect>` of that scale at `(x * scale, y * scale)`, rows emitted top
/// to bottom, columns left to right. The document's `<title>` names the
/// artwork (placeholder when untitled) and its author.
pub fn render_svg(artwork: &Artwork) -> String {
    let scale = svg_scale(artwork.size);
    let canvas = artwork.size * scale;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}" viewBox="0 0 {canvas} {canvas}" shape-rendering="crispEdges">"#
    );
    let _ = write!(
        svg,
        "<title>{} by {}</title>",
        xml_escape(artwork.display_title()),
        xml_escape(&artwork.author)
    );

    for (y, row) in artwork.pixels.iter().enumerate() {
        for (x, _) in row.iter().enumerate() {
            // resolved_color only fails on unvalidated input
            let fill = artwork.resolved_color(x, y).unwrap_or("#000000");
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{scale}" height="{scale}" fill="{fill}"/>"#,
                x as u32 * scale,
                y as u32 * scale,
            );
        }
    }

    svg.push_str("</svg>");
    svg
}
