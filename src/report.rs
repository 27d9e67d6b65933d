// src/report.rs
// A validated reference to one publicly shared combat report, plus the
// page-sequence URL building the scrape driver walks through.

use std::error::Error;
use std::fmt;

use crate::config::consts::{HOST, REPORT_PREFIX};
use crate::config::options::{EncounterFilter, MetricKind};

/// One combat report. `code` is 16 ASCII alphanumerics; anonymized reports
/// carry an `a:` prefix on the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    code: String,
    anonymized: bool,
}

impl Report {
    /// Accepts a full report URL or a bare code.
    ///
    /// `https://www.fflogs.com/reports/a:VrNFghvTcL3J48WK`, with or without
    /// scheme, `www.`, or a trailing slash — or just `a:VrNFghvTcL3J48WK`.
    pub fn parse(input: &str) -> Result<Self, Box<dyn Error>> {
        let mut s = input.trim();

        for prefix in ["https://", "http://"] {
            if let Some(rest) = s.strip_prefix(prefix) {
                s = rest;
            }
        }
        if let Some(rest) = s.strip_prefix("www.") {
            s = rest;
        }
        if let Some(rest) = s.strip_prefix("fflogs.com") {
            s = rest
                .strip_prefix(REPORT_PREFIX)
                .ok_or_else(|| format!("Not a report URL: {}", input))?;
        }
        let s = s.trim_end_matches('/');

        // Drop any query/fragment the user pasted along.
        let s = s.split(['?', '#']).next().unwrap_or(s);

        let (anonymized, code) = match s.strip_prefix("a:") {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if code.len() != 16 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("Invalid report code: {}", input).into());
        }

        Ok(Self { code: code.to_string(), anonymized })
    }

    /// Code as the site spells it, `a:` prefix included.
    pub fn code(&self) -> String {
        if self.anonymized { join!("a:", &self.code) } else { self.code.clone() }
    }

    /// Code usable as a filename stem (no `:`).
    pub fn file_stem(&self) -> String {
        if self.anonymized { join!("a-", &self.code) } else { self.code.clone() }
    }

    pub fn url(&self) -> String {
        format!("https://{}{}{}", HOST, REPORT_PREFIX, self.code())
    }

    /// Path + query for the all-encounters summary page.
    ///
    /// `boss=-2` selects the all-fights summary; the encounter filter rides
    /// along as a query parameter (no browser here to read fragments).
    pub fn summary_path(&self, filter: EncounterFilter) -> String {
        let mut path = format!("{}{}?boss=-2", REPORT_PREFIX, self.code());
        if let Some(q) = filter.query() {
            path.push('&');
            path.push_str(q);
        }
        path
    }

    /// Path + query for one of the stat-table tabs.
    pub fn metric_path(&self, filter: EncounterFilter, kind: MetricKind) -> String {
        let mut path = self.summary_path(filter);
        path.push_str("&type=");
        path.push_str(kind.type_query());
        path
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
