// src/store.rs
// Disk layer: per-report CSV artifacts (the scrape's raw output) and the
// cached summary tables the GUI loads at startup.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{STORE_DIR, STORE_SEP};
use crate::config::options::MetricKind;
use crate::csv::{self, detect_headers, parse_rows};
use crate::report::Report;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/* ---------------- CSV artifacts ---------------- */

/// Remove stale artifacts before a scrape run. Returns how many went away.
/// A missing directory is fine (first run).
pub fn clear_artifacts(dir: &Path) -> io::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut removed = 0usize;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("csv") {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Write one report's table as `<code>-<metric>.csv`, headers included.
pub fn write_artifact(
    dir: &Path,
    report: &Report,
    kind: MetricKind,
    ds: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}-{}.csv", report.file_stem(), kind.file_stem()));

    let mut buf: Vec<u8> = Vec::new();
    if let Some(h) = &ds.headers {
        csv::write_row(&mut buf, h, STORE_SEP)?;
    }
    for r in &ds.rows {
        csv::write_row(&mut buf, r, STORE_SEP)?;
    }
    fs::write(&path, buf)?;
    Ok(path)
}

/// Write both of a report's tables, or neither. A report that cannot
/// land both files must contribute nothing, or its half-scraped rows
/// would skew every downstream mean; a failure on the second file
/// removes the first.
pub fn write_report_artifacts(
    dir: &Path,
    report: &Report,
    damage: &DataSet,
    healing: &DataSet,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let pairs = [
        (MetricKind::DamageDone, damage),
        (MetricKind::HealingDone, healing),
    ];

    let mut written = Vec::with_capacity(pairs.len());
    for (kind, ds) in pairs {
        match write_artifact(dir, report, kind, ds) {
            Ok(path) => written.push(path),
            Err(e) => {
                for p in &written {
                    let _ = fs::remove_file(p);
                }
                return Err(e);
            }
        }
    }
    Ok(written)
}

/// Every `*.csv` under the artifact dir, sorted for determinism.
pub fn list_artifacts(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    if !dir.exists() {
        return Ok(out);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("csv") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/* ---------------- Summary cache ---------------- */

fn summary_path(kind: MetricKind) -> PathBuf {
    PathBuf::from(STORE_DIR).join(format!("{}.csv", kind.file_stem()))
}

pub fn save_summary(kind: MetricKind, ds: &DataSet) -> io::Result<PathBuf> {
    let path = summary_path(kind);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf: Vec<u8> = Vec::new();
    if let Some(h) = &ds.headers {
        csv::write_row(&mut buf, h, STORE_SEP)?;
    }
    for r in &ds.rows {
        csv::write_row(&mut buf, r, STORE_SEP)?;
    }
    fs::write(&path, buf)?;
    Ok(path)
}

pub fn load_summary(kind: MetricKind) -> Result<DataSet, Box<dyn std::error::Error>> {
    let path = summary_path(kind);
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let (headers, rows) = detect_headers(parse_rows(&text, STORE_SEP));
    Ok(DataSet { headers, rows })
}
