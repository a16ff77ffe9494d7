// src/scrape/scrape.rs

use std::{error::Error, thread, time::Duration};

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::config::consts::BASE_WIKI;
use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::progress::Progress;

use super::{images, links, skin};

/// Outcome counters for one scrape run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Scrape default-skin images for every discovered brawler, sequentially.
///
/// Discovery failure is fatal. Per-item failures are logged and counted,
/// and the run moves on to the next item. A fixed pause follows each
/// successful download; that is the only throttling.
pub fn collect_images(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, Box<dyn Error>> {
    let client = net::client()?;
    let base = Url::parse(BASE_WIKI)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching category page…");
    }
    let brawlers = links::discover(&client)?;
    logf!("Scrape: Begin candidates={}", brawlers.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(brawlers.len());
    }

    let mut report = ScrapeReport::default();

    for (name, url) in &brawlers {
        match fetch_one(&client, &base, name, url, opts) {
            Ok(Some(path)) => {
                report.downloaded += 1;
                logf!("Scrape: OK {name} → {}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(name);
                }
                thread::sleep(Duration::from_millis(opts.pause_ms)); // be polite
            }
            Ok(None) => {
                report.skipped += 1;
                logd!("Scrape: No default skin for {name}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(name);
                }
            }
            Err(e) => {
                report.failed += 1;
                loge!("Scrape: {name}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Scrape: Done downloaded={} skipped={} failed={}",
        report.downloaded, report.skipped, report.failed
    );

    Ok(report)
}

/// One article: fetch, resolve the default-skin image, download it.
/// `Ok(None)` means the marker was absent — expected, the caller skips.
fn fetch_one(
    client: &Client,
    base: &Url,
    name: &str,
    article_url: &Url,
    opts: &ScrapeOptions,
) -> Result<Option<std::path::PathBuf>, Box<dyn Error>> {
    let body = net::get_html(client, article_url.as_str())?;
    let doc = Html::parse_document(&body);

    let Some(img_url) = skin::pick_default_skin(&doc, base) else {
        return Ok(None);
    };

    let path = images::download_image(client, name, &img_url, &opts.image_dir)?;
    Ok(Some(path))
}
