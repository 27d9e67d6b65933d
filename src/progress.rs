// src/progress.rs
/// Lightweight progress reporting used by the long-running scrape.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of reports in the run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One report fully scraped (both artifacts written).
    fn item_done(&mut self, _index: usize, _code: &str) {}

    /// One report skipped, with the reason (comp mismatch, fetch failure).
    fn item_skipped(&mut self, _index: usize, _code: &str, _why: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
