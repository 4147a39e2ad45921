//! Pixelgallery - command-line tool for validating and rendering gallery artworks

use std::process::ExitCode;

use pixelgallery::cli;

fn main() -> ExitCode {
    cli::run()
}
