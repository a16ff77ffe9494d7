// src/config/consts.rs

// Net config
pub const BASE_WIKI: &str = "https://brawlstars.fandom.com";
pub const CATEGORY_URL: &str = "https://brawlstars.fandom.com/wiki/Category:Brawlers";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; BrawlerDefaultSkinScraper/1.0; +https://example.com)";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Article links on the category page
pub const ARTICLE_PREFIX: &str = "/wiki/";
/// Reserved wiki namespaces that are never brawler articles.
pub const SKIP_PREFIXES: [&str; 3] = ["/wiki/Category:", "/wiki/File:", "/wiki/Special:"];

// Scrape
/// Marker substring identifying the canonical (default skin) image of an article.
pub const DEFAULT_SKIN_MARKER: &str = "skin-default";
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const DOWNLOAD_CHUNK: usize = 8192;

// Local output
pub const IMAGE_DIR: &str = "brawler_images_default";
/// Filename suffix between slug and extension: `<slug>_default.<ext>`.
pub const FILE_SUFFIX: &str = "_default";
pub const FALLBACK_EXT: &str = ".png";
pub const IMAGE_EXTS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

// Generator
pub const DEFAULT_HTML_OUT: &str = "index.html";

// Local session store
pub const STORE_DIR: &str = ".store";
pub const SESSION_FILE: &str = "session.json";
pub const EXPORT_FILE: &str = "brawler_ratings.json";
