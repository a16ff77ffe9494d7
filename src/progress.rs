// src/progress.rs
/// Lightweight progress reporting used by the long-running scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of candidate articles.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One image landed on disk.
    fn item_done(&mut self, _name: &str) {}

    /// Article had no default-skin image; expected absence, not an error.
    fn item_skipped(&mut self, _name: &str) {}

    /// Fetch/parse/download failed for this item; the scrape continues.
    fn item_failed(&mut self, _name: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
