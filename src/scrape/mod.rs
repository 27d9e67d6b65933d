// src/scrape/mod.rs
mod session;

pub use session::{LogOutcome, ScrapeRun, collect_reports};
