// src/scrape/links.rs

use std::collections::BTreeMap;
use std::error::Error;

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::config::consts::{ARTICLE_PREFIX, BASE_WIKI, CATEGORY_URL, SKIP_PREFIXES};
use crate::core::{net, sanitize::normalize_ws};

use super::sel;

/// Fetch the category page and map display name → absolute article URL.
/// Any transport or HTTP-status failure here aborts the whole scrape.
pub fn discover(client: &Client) -> Result<BTreeMap<String, Url>, Box<dyn Error>> {
    let base = Url::parse(BASE_WIKI)?;
    let body = net::get_html(client, CATEGORY_URL)?;
    let doc = Html::parse_document(&body);
    Ok(extract_article_links(&doc, &base))
}

/// Scan every hyperlink on the page, keeping only same-site article links
/// and dropping reserved namespaces (category/file/special). Duplicate
/// display names overwrite earlier entries: last occurrence wins.
pub fn extract_article_links(doc: &Html, base: &Url) -> BTreeMap<String, Url> {
    let anchors = sel("a[href]");
    let mut out = BTreeMap::new();

    for a in doc.select(&anchors) {
        let text = normalize_ws(&a.text().collect::<String>());
        if text.is_empty() { continue; }

        let Some(href) = a.value().attr("href") else { continue };

        // Only wiki article links
        if !href.starts_with(ARTICLE_PREFIX) { continue; }
        if SKIP_PREFIXES.iter().any(|p| href.starts_with(p)) { continue; }

        let Ok(url) = base.join(href) else { continue };
        out.insert(text, url);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_of(html: &str) -> BTreeMap<String, Url> {
        let base = Url::parse(BASE_WIKI).unwrap();
        extract_article_links(&Html::parse_document(html), &base)
    }

    #[test]
    fn keeps_article_links_only() {
        let html = r#"
            <a href="/wiki/Shelly">Shelly</a>
            <a href="/wiki/Category:Brawlers">Category</a>
            <a href="/wiki/File:Shelly.png">File link</a>
            <a href="/wiki/Special:Search">Special</a>
            <a href="https://elsewhere.example/wiki/Nita">Nita offsite</a>
            <a href="/notwiki/Thing">Thing</a>
        "#;
        let links = links_of(html);
        assert_eq!(links.len(), 1);
        assert_eq!(
            links.get("Shelly").map(|u| u.as_str()),
            Some("https://brawlstars.fandom.com/wiki/Shelly")
        );
    }

    #[test]
    fn skips_empty_link_text() {
        let html = r#"<a href="/wiki/Shelly"><img src="x.png"></a>"#;
        assert!(links_of(html).is_empty());
    }

    #[test]
    fn last_occurrence_wins_for_duplicate_names() {
        let html = r#"
            <a href="/wiki/Shelly">Shelly</a>
            <a href="/wiki/Shelly_(disambiguation)">Shelly</a>
        "#;
        let links = links_of(html);
        assert_eq!(
            links.get("Shelly").map(|u| u.as_str()),
            Some("https://brawlstars.fandom.com/wiki/Shelly_(disambiguation)")
        );
    }

    #[test]
    fn link_text_whitespace_is_normalized() {
        let html = "<a href=\"/wiki/El_Primo\">El\n  Primo</a>";
        let links = links_of(html);
        assert!(links.contains_key("El Primo"));
    }

    #[test]
    fn no_discovered_link_starts_with_reserved_namespace() {
        let html = r#"
            <a href="/wiki/Colt">Colt</a>
            <a href="/wiki/Category:Skins">Skins</a>
            <a href="/wiki/File:Colt.png">Colt png</a>
        "#;
        for url in links_of(html).values() {
            let path = url.path();
            assert!(!path.starts_with("/wiki/Category:"));
            assert!(!path.starts_with("/wiki/File:"));
            assert!(!path.starts_with("/wiki/Special:"));
        }
    }
}
