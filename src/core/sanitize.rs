// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::FILE_SUFFIX;

// \w is Unicode-aware in the regex crate, which is exactly what we want
// for brawler names like "El Primo" or non-Latin fan wikis.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filesystem-safe slug: drop everything outside word chars / whitespace /
/// hyphens, then collapse whitespace runs to single underscores.
pub fn slugify(name: &str) -> String {
    let trimmed = name.trim();
    let stripped = NON_WORD.replace_all(trimmed, "");
    let slug = WHITESPACE.replace_all(stripped.trim(), "_").into_owned();
    if slug.is_empty() { s!("unknown") } else { slug }
}

/// Display name from an image filename: strip the extension, drop the
/// trailing default-skin suffix, and turn underscores back into spaces.
pub fn display_name(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    };
    let cut = stem.len().saturating_sub(FILE_SUFFIX.len());
    let stem = if stem.is_char_boundary(cut) && stem[cut..].eq_ignore_ascii_case(FILE_SUFFIX) {
        &stem[..cut]
    } else {
        stem
    };
    stem.replace('_', " ").trim().to_string()
}
