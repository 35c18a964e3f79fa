//! Contents.json data model for an Xcode app icon set
//!
//! Only the subset of Apple's asset catalog schema needed to describe a
//! single-size app icon (one 1024pt image that Xcode scales for every slot)
//! is modelled here.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Author recorded in the `info` block of generated manifests
pub const AUTHOR: &str = "xcode";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries of the icon set
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an icon set
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The image file, relative to the icon set directory
    pub filename: String,

    /// The device type (e.g., "universal", "iphone")
    pub idiom: String,

    /// Target platform of a single-size icon (e.g., "ios")
    pub platform: String,

    /// The size of the image in points (e.g., "1024x1024")
    pub size: String,
}

/// Versioning and authorship information
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The application or tool that authored the catalog
    pub author: String,
}

impl ContentsFile {
    /// Creates an empty manifest authored by `author`
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    /// Manifest for an icon set holding one universal iOS icon of `size` points
    pub fn single_size_app_icon(filename: String, size: u32) -> Self {
        let mut contents = Self::new(AUTHOR.to_string());
        contents.add_image(ImageEntry::universal_ios(filename, size));
        contents
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Universal iOS entry, as Xcode writes for single-size icons
    pub fn universal_ios(filename: String, size: u32) -> Self {
        Self {
            filename,
            idiom: "universal".to_string(),
            platform: "ios".to_string(),
            size: format!("{size}x{size}"),
        }
    }
}

/// Writes `contents` as `Contents.json` into `dir` and returns the written path
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<PathBuf> {
    let json =
        serde_json::to_string_pretty(contents).context("Failed to serialize Contents.json")?;
    let path = dir.join("Contents.json");
    std::fs::write(&path, json).context("Failed to write Contents.json file")?;
    Ok(path)
}
