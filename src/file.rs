// src/file.rs

use std::{error::Error, fs, path::Path};

use crate::config::consts::IMAGE_EXTS;

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Recognized image file? Checked against the fixed extension allow-list,
/// case-insensitively.
pub fn has_image_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTS.iter().any(|ok| *ok == e)
        })
        .unwrap_or(false)
}
