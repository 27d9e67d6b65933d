// tests/pipeline.rs
//
// Disk-level walk of the post-scrape pipeline: artifacts written per
// report, read back, classified and folded into the summary tables.

use std::fs;
use std::path::PathBuf;

use ff_scrape::combine;
use ff_scrape::config::options::MetricKind;
use ff_scrape::ingest;
use ff_scrape::report::Report;
use ff_scrape::store::{self, DataSet};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ffs_pipe_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table(headers: &[&str], rows: &[&[&str]]) -> DataSet {
    DataSet {
        headers: Some(headers.iter().map(|s| s.to_string()).collect()),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

const DMG: &[&str] = &["Parse %", "Name", "Amount", "Active", "DPS", "rDPS"];
const HEAL: &[&str] = &["Parse %", "Name", "Amount", "Overheal", "Active", "HPS", "rHPS"];

#[test]
fn artifacts_round_trip_through_ingest() {
    let dir = tmp_dir("roundtrip");
    let report = Report::parse("VrNFghvTcL3J48WK").unwrap();

    let damage = table(DMG, &[
        &["99", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
        &["-", "Limit Break", "40$2.0%", "5%", "4.0", "4.0"],
    ]);
    let healing = table(HEAL, &[
        &["80", "Cael Yan", "2,000$60.0%", "12%", "90%", "200.0", "190.0"],
    ]);

    let p1 = store::write_artifact(&dir, &report, MetricKind::DamageDone, &damage).unwrap();
    let p2 = store::write_artifact(&dir, &report, MetricKind::HealingDone, &healing).unwrap();
    assert!(p1.file_name().unwrap().to_string_lossy().ends_with("-damage.csv"));
    assert!(p2.file_name().unwrap().to_string_lossy().ends_with("-healing.csv"));

    let (dmg_tables, heal_tables) = ingest::load_artifacts(&dir).unwrap();
    assert_eq!(dmg_tables.len(), 1);
    assert_eq!(heal_tables.len(), 1);

    // noise row gone, real row intact
    assert_eq!(dmg_tables[0].rows.len(), 1);
    assert_eq!(dmg_tables[0].rows[0][1], "Aeri Tal");
    assert_eq!(heal_tables[0].rows[0][1], "Cael Yan");
}

#[test]
fn two_reports_fold_into_one_summary() {
    let dir = tmp_dir("fold");
    let r1 = Report::parse("AAAAAAAAAAAAAAA1").unwrap();
    let r2 = Report::parse("AAAAAAAAAAAAAAA2").unwrap();

    let t1 = table(DMG, &[
        &["90", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
        &["30", "Bran Kal", "500$25.0%", "90%", "50.0", "45.0"],
    ]);
    let t2 = table(DMG, &[
        &["70", "Aeri Tal", "3,000$40.0%", "94%", "300.0", "290.0"],
        &["50", "Bran Kal", "700$35.0%", "92%", "70.0", "65.0"],
    ]);

    store::write_artifact(&dir, &r1, MetricKind::DamageDone, &t1).unwrap();
    store::write_artifact(&dir, &r2, MetricKind::DamageDone, &t2).unwrap();

    let (dmg_tables, heal_tables) = ingest::load_artifacts(&dir).unwrap();
    assert_eq!(dmg_tables.len(), 2);
    assert!(heal_tables.is_empty());

    let summary = combine::summarize_damage(&dmg_tables).unwrap();
    assert_eq!(summary.headers.as_deref().unwrap(), combine::DAMAGE_SUMMARY_COLUMNS);
    assert_eq!(summary.rows.len(), 2);

    // sorted by Amount Total, biggest first
    assert_eq!(summary.rows[0][1], "Aeri Tal");
    assert_eq!(summary.rows[0][0], "80");        // mean parse
    assert_eq!(summary.rows[0][3], "4000.00");   // summed amount
    assert_eq!(summary.rows[1][1], "Bran Kal");
    assert_eq!(summary.rows[1][3], "1200.00");
}

#[test]
fn report_that_cannot_write_both_tables_leaves_nothing() {
    let dir = tmp_dir("atomic");
    let report = Report::parse("VrNFghvTcL3J48WK").unwrap();

    let damage = table(DMG, &[
        &["99", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
    ]);
    let healing = table(HEAL, &[
        &["80", "Cael Yan", "2,000$60.0%", "12%", "90%", "200.0", "190.0"],
    ]);

    // Occupy the healing file's slot with a directory so the second
    // write fails after the damage file already landed.
    fs::create_dir_all(dir.join(format!("{}-healing.csv", report.file_stem()))).unwrap();

    let result = store::write_report_artifacts(&dir, &report, &damage, &healing);
    assert!(result.is_err());

    // the half-written damage file must be gone again
    assert!(!dir.join(format!("{}-damage.csv", report.file_stem())).exists());
    assert!(store::list_artifacts(&dir).unwrap().is_empty());

    // and ingestion over that dir sees no tables at all
    let (dmg_tables, heal_tables) = ingest::load_artifacts(&dir).unwrap();
    assert!(dmg_tables.is_empty());
    assert!(heal_tables.is_empty());
}

#[test]
fn both_artifacts_land_together() {
    let dir = tmp_dir("pair");
    let report = Report::parse("VrNFghvTcL3J48WK").unwrap();

    let damage = table(DMG, &[
        &["99", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
    ]);
    let healing = table(HEAL, &[
        &["80", "Cael Yan", "2,000$60.0%", "12%", "90%", "200.0", "190.0"],
    ]);

    let written = store::write_report_artifacts(&dir, &report, &damage, &healing).unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(store::list_artifacts(&dir).unwrap().len(), 2);
}

#[test]
fn clear_artifacts_only_touches_csv() {
    let dir = tmp_dir("clear");
    let report = Report::parse("VrNFghvTcL3J48WK").unwrap();
    let damage = table(DMG, &[
        &["99", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
    ]);
    store::write_artifact(&dir, &report, MetricKind::DamageDone, &damage).unwrap();
    fs::write(dir.join("notes.txt"), "keep me").unwrap();

    let removed = store::clear_artifacts(&dir).unwrap();
    assert_eq!(removed, 1);
    assert!(dir.join("notes.txt").exists());
    assert!(store::list_artifacts(&dir).unwrap().is_empty());

    // a dir that never existed is not an error
    assert_eq!(store::clear_artifacts(&dir.join("missing")).unwrap(), 0);
}
