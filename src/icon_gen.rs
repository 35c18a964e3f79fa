use crate::contents_json::{self, ContentsFile};
use crate::render;
use anyhow::{Context, Result};
use clap::Parser;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where the icon lands inside the Xcode project
pub const DEFAULT_OUTPUT: &str =
    "ClaudeHistorySearch/Assets.xcassets/AppIcon.appiconset/AppIcon.png";

#[derive(Debug, Parser)]
#[clap(
    name = "app-icon-gen",
    about = "Draw the magnifying-glass app icon and save it into the asset catalog"
)]
pub struct Args {
    /// Path of the PNG to write.
    #[clap(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side of the square icon in pixels.
    #[clap(
        short,
        long,
        value_name = "PIXELS",
        default_value_t = render::DEFAULT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: u32,

    /// Also write a single-size Contents.json next to the PNG
    #[clap(long)]
    pub contents_json: bool,
}

pub fn generate_icon(args: &Args) -> Result<()> {
    let file_name = args
        .output
        .file_name()
        .and_then(|name| name.to_str())
        .context("Output path must end in a file name")?
        .to_string();

    println!("Generating {file_name}...");
    let icon = render::render(args.size)?;

    let out_dir = args.output.parent().unwrap_or_else(|| Path::new(""));
    if !out_dir.as_os_str().is_empty() {
        create_dir_all(out_dir).context("Can't create output directory")?;
    }

    save_png(&icon, &args.output)?;
    println!("✓ Icon saved to {}", args.output.display());

    if args.contents_json {
        let contents = ContentsFile::single_size_app_icon(file_name, args.size);
        contents_json::write_contents_json(out_dir, &contents)?;
        println!("✓ Generated Contents.json");
    }

    Ok(())
}

fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).context("Failed to create PNG file")?;
    let mut out_file = BufWriter::new(file);
    write_png(icon, &mut out_file).context("Failed to write PNG")?;
    out_file.flush().context("Failed to write PNG")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(icon: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(icon.as_raw(), icon.width(), icon.height(), ColorType::Rgba8)?;
    Ok(())
}
