//! Pixelgallery - core of an indexed-color pixel art gallery
//!
//! This library provides functionality to:
//! - Validate submitted palettes and pixel grids against the gallery rules
//! - Enforce the remix change-ratio policy (at least one pixel, at most half)
//! - Render accepted artworks as ASCII, SVG, HTML, and PNG
//!
//! Routing and durable persistence live outside this crate; storage is
//! reached through the `store::ArtworkStore` seam.

pub mod ascii;
pub mod cli;
pub mod color;
pub mod config;
pub mod html;
pub mod models;
pub mod raster;
pub mod remix;
pub mod service;
pub mod store;
pub mod svg;
pub mod telemetry;
pub mod validate;
