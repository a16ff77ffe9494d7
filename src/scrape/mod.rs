// src/scrape/mod.rs
//
// Folder module facade: re-export public entrypoints.

pub mod images;
pub mod links;
pub mod skin;

mod scrape;

pub use scrape::{ScrapeReport, collect_images};

use scraper::Selector;

/// Parse a static selector. All selectors in this crate are compile-time
/// string literals, so a parse failure is a programming error.
pub(crate) fn sel(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}
