// src/config/consts.rs

// Net config
pub const HOST: &str = "www.fflogs.com";
pub const REPORT_PREFIX: &str = "/reports/";
pub const USER_AGENT: &str = "ff_scrape/0.3";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';

// Scraped CSV artifacts (one damage + one healing file per report)
pub const DEFAULT_CSV_DIR: &str = "out/csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_SUMMARY_SUBDIR: &str = "summary";

// Pages load their stat tables late and inconsistently; refetch
// until the expected marker shows up, bounded.
pub const POLL_ATTEMPTS: u32 = 5;
pub const POLL_PAUSE_MS: u64 = 1500;

// Pause between reports
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Row the site always appends to damage tables; carries no player data.
pub const NOISE_ROW_NAME: &str = "Limit Break";
