// src/scrape/images.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{FALLBACK_EXT, FILE_SUFFIX};
use crate::core::{net, sanitize::slugify};
use crate::file::ensure_directory;

/// `<slug>_default.<ext>`, where the extension comes from the URL path
/// (query strings ignored) and falls back to `.png`.
pub fn image_filename(name: &str, url: &Url) -> String {
    let ext = Path::new(url.path())
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| join!(".", e))
        .unwrap_or_else(|| s!(FALLBACK_EXT));

    join!(slugify(name), FILE_SUFFIX, &ext)
}

/// Download one resolved image into `dir`, creating the directory first
/// if needed. Returns the path written to.
pub fn download_image(
    client: &Client,
    name: &str,
    url: &Url,
    dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(dir)?;
    let path = dir.join(image_filename(name, url));
    net::download(client, url.as_str(), &path)?;
    Ok(path)
}
