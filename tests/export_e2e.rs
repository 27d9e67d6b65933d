// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use ff_scrape::config::options::{ExportFormat, ExportOptions, MetricKind};
use ff_scrape::file;
use ff_scrape::store::DataSet;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ffs_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn summary() -> DataSet {
    DataSet {
        headers: Some(
            ["Parse %", "Player Name", "Amount %", "Amount Total", "Active %", "DPS", "rDPS"]
                .iter().map(|s| s.to_string()).collect(),
        ),
        rows: vec![
            vec!["99", "Aeri Tal", "31.10", "2469134.00", "98.00", "12345.60", "11900.20"]
                .into_iter().map(String::from).collect(),
            vec!["45", "Bran, Kal", "24.90", "1975308.00", "95.00", "9876.50", "9500.00"]
                .into_iter().map(String::from).collect(),
        ],
    }
}

#[test]
fn csv_export_writes_fixed_stem_with_headers() {
    let dir = tmp_dir("csv");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());

    let path = file::write_export(&export, MetricKind::DamageDone, &summary()).unwrap();
    assert!(path.to_string_lossy().ends_with("damage.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap().split(',').next(), Some("Parse %"));
    // the comma inside the name forces quoting
    assert!(text.contains("\"Bran, Kal\""));
}

#[test]
fn tsv_export_switches_delimiter_and_extension() {
    let dir = tmp_dir("tsv");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());
    export.format = ExportFormat::Tsv;

    let path = file::write_export(&export, MetricKind::HealingDone, &summary()).unwrap();
    assert!(path.to_string_lossy().ends_with("healing.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().next().unwrap().contains('\t'));
    assert!(!text.lines().next().unwrap().contains(",\t"));
}

#[test]
fn headers_can_be_left_out() {
    let dir = tmp_dir("nohdr");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());
    export.include_headers = false;

    let path = file::write_export(&export, MetricKind::DamageDone, &summary()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().next().unwrap().starts_with("99"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdir").join("deep").join("er");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());

    let path = file::write_export(&export, MetricKind::DamageDone, &summary()).unwrap();
    assert!(path.exists());
}
