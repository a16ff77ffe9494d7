// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Scrape,
    Generate,
    Rate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Where downloaded images land.
    pub image_dir: PathBuf,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(IMAGE_DIR),
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory scanned for rated images.
    pub image_dir: PathBuf,
    pub out_path: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(IMAGE_DIR),
            out_path: PathBuf::from(DEFAULT_HTML_OUT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub command: Option<CommandKind>,
    pub scrape: ScrapeOptions,
    pub generate: GenerateOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            command: None,
            scrape: ScrapeOptions::default(),
            generate: GenerateOptions::default(),
        }
    }
}
