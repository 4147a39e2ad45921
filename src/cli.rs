//! Command-line interface implementation

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::ascii::render_ascii;
use crate::config::GalleryConfig;
use crate::html::render_html;
use crate::models::{Artwork, ArtworkSubmission};
use crate::raster::{render_image, save_png, scale_image};
use crate::remix::change_ratio;
use crate::svg::{render_svg, svg_scale};
use crate::telemetry::{RejectionEntry, RejectionLog};
use crate::validate::{check_palette, check_pixels, check_size};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelgallery - validate and render indexed-color pixel art
#[derive(Parser)]
#[command(name = "pxg")]
#[command(about = "Pixelgallery - validate and render indexed-color pixel art")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output representation for the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Ascii,
    Svg,
    Html,
    Png,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an artwork JSON file as ASCII, SVG, HTML, or PNG
    Render {
        /// Input JSON file (a stored artwork or a bare submission)
        input: PathBuf,

        /// Output representation
        #[arg(short, long, value_enum, default_value = "ascii")]
        format: RenderFormat,

        /// Output file. Required for png; defaults to stdout otherwise
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an artwork JSON file against the gallery rules
    Validate {
        /// Input JSON file (a stored artwork or a bare submission)
        input: PathBuf,

        /// Gallery configuration file (defaults to the 8/16/32/64 policy)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Append rejections to this JSONL telemetry log
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Check the remix change-ratio policy between two artwork files
    RemixCheck {
        /// Original artwork JSON file
        original: PathBuf,

        /// Remix candidate JSON file
        candidate: PathBuf,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, format, output } => run_render(&input, format, output.as_deref()),
        Commands::Validate { input, config, log } => {
            run_validate(&input, config.as_deref(), log.as_deref())
        }
        Commands::RemixCheck { original, candidate } => run_remix_check(&original, &candidate),
    }
}

/// Read an artwork from a JSON file. Bare submissions (no id) are wrapped
/// in placeholder gallery metadata so they can be rendered locally.
fn read_artwork(path: &Path) -> Result<Artwork, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot open input file '{}': {}", path.display(), e))?;

    if let Ok(artwork) = serde_json::from_str::<Artwork>(&text) {
        return Ok(artwork);
    }

    let submission: ArtworkSubmission = serde_json::from_str(&text)
        .map_err(|e| format!("'{}' is not an artwork or submission: {}", path.display(), e))?;
    Ok(Artwork {
        id: "local".to_string(),
        author: submission.author,
        title: submission.title,
        size: submission.size,
        palette: submission.palette,
        pixels: submission.pixels,
        created_at: 0,
        views: 0,
        remix_of: submission.remix_of,
    })
}

/// Palette and grid checks. Rendering and comparison are undefined on
/// unvalidated input, so every command runs these first.
fn check_content(artwork: &Artwork) -> Result<(), String> {
    check_palette(&artwork.palette).map_err(|e| e.to_string())?;
    check_pixels(&artwork.pixels, artwork.size, artwork.palette.len())
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Structural checks shared by render and validate. Size policy comes from
/// the caller's config.
fn check_artwork(artwork: &Artwork, config: &GalleryConfig) -> Result<(), String> {
    check_size(artwork.size, config).map_err(|e| e.to_string())?;
    check_content(artwork)
}

/// Execute the render command
fn run_render(input: &Path, format: RenderFormat, output: Option<&Path>) -> ExitCode {
    let artwork = match read_artwork(input) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    // Size policy is not enforced here: render accepts any square canvas.
    if let Err(e) = check_content(&artwork) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let text = match format {
        RenderFormat::Ascii => render_ascii(&artwork),
        RenderFormat::Svg => render_svg(&artwork),
        RenderFormat::Html => render_html(&artwork),
        RenderFormat::Png => {
            let Some(path) = output else {
                eprintln!("Error: --output is required for png");
                return ExitCode::from(EXIT_INVALID_ARGS);
            };
            let image = scale_image(render_image(&artwork), svg_scale(artwork.size));
            return match save_png(&image, path) {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        None => println!("{}", text),
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the validate command
fn run_validate(input: &Path, config_path: Option<&Path>, log_path: Option<&Path>) -> ExitCode {
    let config = match config_path {
        Some(path) => match GalleryConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => GalleryConfig::default(),
    };

    let artwork = match read_artwork(input) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match check_artwork(&artwork, &config) {
        Ok(()) => {
            println!(
                "OK: {}x{} canvas, {} palette colors",
                artwork.size,
                artwork.size,
                artwork.palette.len()
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(reason) => {
            eprintln!("Error: {}", reason);
            if let Some(path) = log_path {
                let log = RejectionLog::new(path, true);
                let entry = RejectionEntry::new("validate", &reason)
                    .with_artwork(input.display().to_string());
                if let Err(e) = log.log(&entry) {
                    eprintln!("Warning: cannot write telemetry log: {}", e);
                }
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the remix-check command
fn run_remix_check(original_path: &Path, candidate_path: &Path) -> ExitCode {
    let (original, candidate) = match (read_artwork(original_path), read_artwork(candidate_path)) {
        (Ok(o), Ok(c)) => (o, c),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    for (label, artwork) in [("original", &original), ("candidate", &candidate)] {
        if let Err(e) = check_content(artwork) {
            eprintln!("Error: {}: {}", label, e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    if original.size != candidate.size {
        eprintln!(
            "Error: remix canvas size {} does not match original's size {}",
            candidate.size, original.size
        );
        return ExitCode::from(EXIT_ERROR);
    }

    let analysis = change_ratio(
        &original.palette,
        &original.pixels,
        &candidate.palette,
        &candidate.pixels,
        original.size,
    );
    println!(
        "{} of {} pixels changed (max allowed: {})",
        analysis.changed,
        original.size as u64 * original.size as u64,
        analysis.max_allowed
    );

    match analysis.check() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
