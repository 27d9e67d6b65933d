// src/ingest.rs
// CSV ingestion: read the downloaded artifacts back in, classify each
// table as damage or healing, scrub placeholder cells and drop the
// known noise row. Tables that can't be classified are skipped with a
// log line, never an error.

use std::{fs, path::Path};

use crate::config::consts::{NOISE_ROW_NAME, STORE_SEP};
use crate::config::options::MetricKind;
use crate::csv::{detect_headers, parse_rows};
use crate::specs::metrics::classify;
use crate::store::{self, DataSet};

/// Damage tables and healing tables from every artifact in `dir`.
pub fn load_artifacts(dir: &Path) -> Result<(Vec<DataSet>, Vec<DataSet>), Box<dyn std::error::Error>> {
    let mut damage = Vec::new();
    let mut healing = Vec::new();

    for path in store::list_artifacts(dir)? {
        let text = fs::read_to_string(&path)?;
        match load_table(&text) {
            Some((MetricKind::DamageDone, ds)) => damage.push(ds),
            Some((MetricKind::HealingDone, ds)) => healing.push(ds),
            None => {
                logd!("Ingest: skipping {} (not a stat table)", path.display());
            }
        }
    }

    logf!("Ingest: {} damage, {} healing table(s)", damage.len(), healing.len());
    Ok((damage, healing))
}

/// Parse one CSV text into a classified, scrubbed table.
pub fn load_table(text: &str) -> Option<(MetricKind, DataSet)> {
    let (headers, rows) = detect_headers(parse_rows(text, STORE_SEP));
    let headers = headers?;
    let kind = classify(&headers)?;

    let name_col = headers.iter().position(|h| h == "Name")?;

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|r| r.get(name_col).map(|n| n != NOISE_ROW_NAME).unwrap_or(false))
        .map(|r| r.into_iter().map(|c| scrub(c)).collect())
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some((kind, DataSet { headers: Some(headers), rows }))
}

/// The site writes `-` for metrics a player has no data for.
fn scrub(cell: String) -> String {
    if cell.trim() == "-" { s!("0") } else { cell }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damage_csv() -> &'static str {
        "Parse %,Name,Amount,Active,DPS,rDPS\n\
         99,Aeri Tal,\"1,234$50.0%\",98%,\"10,000.0\",\"9,800.0\"\n\
         -,Limit Break,\"50$2.0%\",5%,400.0,400.0\n"
    }

    #[test]
    fn classifies_and_drops_noise_row() {
        let (kind, ds) = load_table(damage_csv()).unwrap();
        assert_eq!(kind, MetricKind::DamageDone);
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0][1], "Aeri Tal");
    }

    #[test]
    fn dash_cells_become_zero() {
        let csv = "Parse %,Name,Amount,Overheal,Active,HPS,rHPS\n\
                   -,Cael Yan,\"1,000$10.0%\",12%,90%,\"2,000.0\",\"1,900.0\"\n";
        let (kind, ds) = load_table(csv).unwrap();
        assert_eq!(kind, MetricKind::HealingDone);
        assert_eq!(ds.rows[0][0], "0");
    }

    #[test]
    fn unclassifiable_table_is_skipped() {
        assert!(load_table("A,B\n1,2\n").is_none());
        // All rows being noise is as good as empty.
        let csv = "Parse %,Name,Amount,Active,DPS,rDPS\n1,Limit Break,2,3,4,5\n";
        assert!(load_table(csv).is_none());
    }
}
