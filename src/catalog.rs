// src/catalog.rs

use std::{error::Error, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::sanitize::display_name;
use crate::file::has_image_ext;

/// The unit being rated: a display name (unique key) plus the relative
/// path of its image, as embedded in the generated page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub file: String,
}

/// Scan `image_dir` and build the ordered item catalog, one entry per
/// recognized image file, sorted by filename. A missing directory or an
/// empty result is fatal: there is nothing to rate.
pub fn build_catalog(image_dir: &Path) -> Result<Vec<Item>, Box<dyn Error>> {
    if !image_dir.is_dir() {
        return Err(format!(
            "Image directory '{}' not found. Run the scrape first, or point --images at it.",
            image_dir.display()
        )
        .into());
    }

    let mut filenames: Vec<String> = Vec::new();
    for entry in fs::read_dir(image_dir)? {
        let path = entry?.path();
        if !path.is_file() || !has_image_ext(&path) { continue; }
        if let Some(fname) = path.file_name().and_then(|s| s.to_str()) {
            filenames.push(fname.to_string());
        }
    }
    filenames.sort();

    // Forward slashes regardless of platform: the path ends up in HTML.
    let dir_str = image_dir.to_string_lossy().replace('\\', "/");

    let items: Vec<Item> = filenames
        .into_iter()
        .map(|fname| Item {
            name: display_name(&fname),
            file: join!(&dir_str, "/", &fname),
        })
        .collect();

    if items.is_empty() {
        return Err(format!(
            "No images found in '{}' with recognized extensions.",
            image_dir.display()
        )
        .into());
    }

    Ok(items)
}
