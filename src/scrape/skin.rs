// src/scrape/skin.rs

use scraper::Html;
use url::Url;

use crate::config::consts::DEFAULT_SKIN_MARKER;

use super::sel;

/// Metadata attributes inspected for the default-skin marker.
const META_ATTRS: [&str; 3] = ["alt", "data-image-name", "data-image-key"];

/// Find the default-skin image of an article page, if any.
///
/// Walks `<img>` elements in document order; for each, the alt text and
/// the two image metadata attributes are joined and lowercased, and the
/// first element whose combined metadata contains the marker wins. The
/// source is taken from the lazy-load attribute when present, else the
/// direct `src`. `None` is expected absence, not an error.
pub fn pick_default_skin(doc: &Html, base: &Url) -> Option<Url> {
    let imgs = sel("img");

    for img in doc.select(&imgs) {
        let mut meta = s!();
        for attr in META_ATTRS {
            if let Some(val) = img.value().attr(attr) {
                if !meta.is_empty() { meta.push(' '); }
                meta.push_str(val);
            }
        }

        if !meta.to_lowercase().contains(DEFAULT_SKIN_MARKER) { continue; }

        // Lazy-loaded pages put the real URL in data-src.
        let Some(src) = img.value().attr("data-src").or_else(|| img.value().attr("src")) else {
            continue;
        };

        if let Ok(url) = base.join(src) {
            return Some(url);
        }
    }

    None
}
