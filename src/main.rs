use anyhow::Result;
use clap::Parser;

use tinta::cli::Args;
use tinta::pipeline::decode::ImageDecoder;
use tinta::pipeline::{extract_from_path, ExtractOptions};
use tinta::preview;
use tinta::theme::ThemeColors;

fn main() -> Result<()> {
    let args = Args::parse();

    let options = ExtractOptions {
        stride: args.stride,
        max_colors: args.max_colors,
        min_distance: args.min_distance,
    };

    let palette = extract_from_path(&ImageDecoder, &args.image, &options)?;

    let mut theme = ThemeColors::default();
    if !theme.apply_palette(&palette) {
        eprintln!(
            "logo yielded {} usable color(s); keeping default theme colors",
            palette.len()
        );
    }
    for color in palette.suggestions() {
        eprintln!("suggestion: {}", color.to_hex());
    }

    if args.preview {
        preview::print_palette(&palette);
        println!();
        preview::print_theme(&theme);
        return Ok(());
    }

    match &args.output {
        Some(path) => theme.write_to(path)?,
        None => print!("{}", theme.serialize()),
    }

    Ok(())
}
