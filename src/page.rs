// src/page.rs

use std::{error::Error, fs, path::Path, path::PathBuf};

use crate::catalog::Item;

/// The rating UI shell; the catalog JSON is spliced in at DATA_SLOT.
const TEMPLATE: &str = include_str!("page/template.html");
const DATA_SLOT: &str = "__BRAWLER_DATA__";

/// Render the single self-contained page embedding `items` as a JSON
/// array literal, and write it to `out_path`. Returns the path written.
pub fn generate(items: &[Item], out_path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    fs::write(out_path, render(items)?)?;
    Ok(out_path.to_path_buf())
}

/// Pure render step, split out so tests can check the document without
/// touching the filesystem.
pub fn render(items: &[Item]) -> Result<String, Box<dyn Error>> {
    // serde_json leaves non-ASCII names unescaped, matching the page's
    // UTF-8 charset.
    let data = serde_json::to_string_pretty(items)?;
    Ok(TEMPLATE.replacen(DATA_SLOT, &data, 1))
}
