// src/specs/metrics.rs
// Per-player stat table from the damage-done / healing-done tabs.
//
// Ground truth is the table with id="main-table-0". Header cells name the
// columns; the exact `DPS` / `HPS` header tells damage and healing tables
// apart. Rows are reshaped into a canonical column order so downstream
// code never depends on how the site happens to order its columns:
//
//   damage:  Parse % | Name | Amount | Active | DPS | rDPS
//   healing: Parse % | Name | Amount | Overheal | Active | HPS | rHPS
//
// `Amount` stays fused ("123456$45.2%") in artifacts; the aggregator
// splits it.

use std::error::Error;

use crate::config::options::MetricKind;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;
use crate::store::DataSet;

pub const TABLE_MARKER: &str = "main-table-0";

const DAMAGE_COLUMNS: &[&str] = &["Parse %", "Name", "Amount", "Active", "DPS", "rDPS"];
const HEALING_COLUMNS: &[&str] = &["Parse %", "Name", "Amount", "Overheal", "Active", "HPS", "rHPS"];

/// Canonical artifact headers for a metric table.
pub fn canonical_columns(kind: MetricKind) -> &'static [&'static str] {
    match kind {
        MetricKind::DamageDone => DAMAGE_COLUMNS,
        MetricKind::HealingDone => HEALING_COLUMNS,
    }
}

/// Extract the stat table and verify it is of the expected kind.
pub fn extract_table(doc: &str, expected: MetricKind) -> Result<DataSet, Box<dyn Error>> {
    let open = join!("<table id=\"", TABLE_MARKER, "\"");
    let table = slice_between_ci(doc, &open, "</table>")
        .ok_or_else(|| format!("{} not found", TABLE_MARKER))?;

    let site_headers = read_header_cells(table);
    if site_headers.is_empty() {
        return Err("stat table has no header row".into());
    }

    let kind = classify(&site_headers)
        .ok_or("stat table has neither a DPS nor an HPS column")?;
    if kind != expected {
        return Err(format!(
            "expected a {} table, got {}",
            expected.title(), kind.title()
        ).into());
    }

    // Map canonical column -> site column index.
    let wanted = canonical_columns(kind);
    let mut site_ix = Vec::with_capacity(wanted.len());
    for w in wanted {
        let ix = site_headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(w))
            .ok_or_else(|| format!("stat table is missing the '{}' column", w))?;
        site_ix.push(ix);
    }

    let mut rows_out = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let cells = read_data_cells(tr);
        // Header repeats, totals and ad rows come up short; skip them.
        if cells.len() < site_headers.len() {
            continue;
        }

        let row: Vec<String> = site_ix.iter().map(|&ix| cells[ix].clone()).collect();
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows_out.push(row);
    }

    if rows_out.is_empty() {
        return Err("stat table has no player rows".into());
    }

    Ok(DataSet {
        headers: Some(wanted.iter().map(|s| s!(*s)).collect()),
        rows: rows_out,
    })
}

/// Which metric a header row belongs to (exact column name, not substring —
/// `rDPS` must not read as `DPS`).
pub fn classify(headers: &[String]) -> Option<MetricKind> {
    for kind in [MetricKind::DamageDone, MetricKind::HealingDone] {
        if headers.iter().any(|h| h == kind.marker_column()) {
            return Some(kind);
        }
    }
    None
}

/* ---------- helpers ---------- */

fn read_header_cells(table_inner: &str) -> Vec<String> {
    let mut headers = Vec::new();
    let mut pos = 0usize;

    while let Some((th_s, th_e)) = next_tag_block_ci(table_inner, "<th", "</th>", pos) {
        let inner = inner_after_open_tag(&table_inner[th_s..th_e]);
        headers.push(strip_tags(normalize_entities(&inner)));
        pos = th_e;

        // Stop when the next non-ws tag isn't another header cell.
        let rest = to_lower(table_inner[pos..].trim_start());
        if !rest.starts_with("<th") {
            break;
        }
    }
    headers
}

fn read_data_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        let inner = inner_after_open_tag(&tr[td_s..td_e]);
        cells.push(strip_tags(normalize_entities(&inner)));
        pos = td_e;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damage_doc() -> String {
        let mut t = s!(r#"<html><table id="main-table-0" class="stats">
            <th>Parse %</th><th>Name</th><th>Amount</th><th>Active</th><th>DPS</th><th>rDPS</th>
        "#);
        for (p, n, a, act, d, rd) in [
            ("99", "Aeri Tal", "1,234,567$31.1%", "98%", "12,345.6", "11,900.2"),
            ("45", "Bran Kal", "987,654$24.9%", "95%", "9,876.5", "9,500.0"),
        ] {
            t.push_str(&format!(
                "<tr class=\"odd\"><td>{p}</td><td><a href=\"#\">{n}</a></td>\
                 <td>{a}</td><td>{act}</td><td>{d}</td><td>{rd}</td></tr>"
            ));
        }
        t.push_str("</table></html>");
        t
    }

    #[test]
    fn extracts_damage_rows_in_canonical_order() {
        let ds = extract_table(&damage_doc(), MetricKind::DamageDone).unwrap();
        assert_eq!(ds.headers.as_deref().unwrap().len(), 6);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[0][1], "Aeri Tal");
        assert_eq!(ds.rows[0][4], "12,345.6");
    }

    #[test]
    fn wrong_kind_is_an_error() {
        assert!(extract_table(&damage_doc(), MetricKind::HealingDone).is_err());
    }

    #[test]
    fn classify_is_exact_on_column_names() {
        let damage: Vec<String> = ["Parse %", "Name", "rDPS", "DPS"].iter().map(|s| s!(*s)).collect();
        assert_eq!(classify(&damage), Some(MetricKind::DamageDone));

        // rDPS alone is not a DPS column
        let odd: Vec<String> = ["Name", "rDPS"].iter().map(|s| s!(*s)).collect();
        assert_eq!(classify(&odd), None);
    }

    #[test]
    fn missing_table_reports_marker() {
        let err = extract_table("<html></html>", MetricKind::DamageDone).unwrap_err();
        assert!(err.to_string().contains(TABLE_MARKER));
    }
}
