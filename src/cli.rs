use std::path::PathBuf;

use clap::Parser;

/// Extract a brand color palette from a logo and emit website theme colors.
#[derive(Parser, Debug)]
#[command(name = "tinta", version, about)]
pub struct Args {
    /// Path to the logo image
    pub image: PathBuf,

    /// Sample every Nth pixel (derived from image size if omitted)
    #[arg(short, long)]
    pub stride: Option<usize>,

    /// Maximum number of palette colors to extract
    #[arg(long, default_value_t = 4)]
    pub max_colors: usize,

    /// Minimum RGB distance between extracted colors
    #[arg(long, default_value_t = 50.0)]
    pub min_distance: f32,

    /// Write the theme to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print colored terminal swatches of the resulting theme
    #[arg(long)]
    pub preview: bool,
}
