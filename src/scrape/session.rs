// src/scrape/session.rs
// The scrape session driver. Walks the fixed page sequence per report
// (summary → damage done → healing done), validates the composition
// against the session reference, and writes two CSV artifacts per
// accepted report.
//
// Reports run strictly in order: the first accepted one establishes the
// composition every later one is checked against. A mismatching or
// failing report is skipped and reported, never fatal.

use std::{error::Error, path::PathBuf, thread, time::Duration};

use crate::{
    comp::{CompCheck, CompStatus, Composition},
    config::consts::REQUEST_PAUSE_MS,
    config::options::{MetricKind, ScrapeOptions},
    core::net,
    progress::Progress,
    report::Report,
    specs::{metrics, summary},
    store::{self, DataSet},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogOutcome {
    Scraped,
    CompMismatch,
    Failed(String),
}

impl LogOutcome {
    pub fn is_scraped(&self) -> bool {
        matches!(self, LogOutcome::Scraped)
    }
}

/// What a scrape run produced.
pub struct ScrapeRun {
    pub outcomes: Vec<(Report, LogOutcome)>,
    pub composition: Option<Composition>,
    pub artifacts: Vec<PathBuf>,
}

impl ScrapeRun {
    pub fn scraped_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_scraped()).count()
    }
}

/// Scrape every report in `opts.reports`, in order.
///
/// Old artifacts are cleared first so ingestion only ever sees this
/// run's output. The returned error covers setup problems only;
/// per-report trouble lands in the outcomes.
pub fn collect_reports(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeRun, Box<dyn Error>> {
    let removed = store::clear_artifacts(&opts.csv_dir)?;
    if removed > 0 {
        logd!("Scrape: cleared {} stale artifact(s)", removed);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.reports.len());
    }

    let mut check = CompCheck::new();
    let mut outcomes = Vec::with_capacity(opts.reports.len());
    let mut artifacts = Vec::new();

    for (i, report) in opts.reports.iter().enumerate() {
        let code = report.code();
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Report {} ({}/{})…", code, i + 1, opts.reports.len()));
        }

        let outcome = match scrape_one(report, opts, &mut check, &mut artifacts) {
            Ok(status) => match status {
                CompStatus::Mismatch => {
                    logf!("Scrape: {} skipped, composition differs", code);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_skipped(i, &code, "composition differs");
                    }
                    LogOutcome::CompMismatch
                }
                _ => {
                    logf!("Scrape: {} done", code);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, &code);
                    }
                    LogOutcome::Scraped
                }
            },
            Err(e) => {
                let msg = e.to_string();
                loge!("Scrape: {} failed: {}", code, msg);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(i, &code, &msg);
                }
                LogOutcome::Failed(msg)
            }
        };
        outcomes.push((report.clone(), outcome));

        if i + 1 < opts.reports.len() {
            pause();
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ScrapeRun {
        outcomes,
        composition: check.established().cloned(),
        artifacts,
    })
}

/// One report's page walk. Returns the comp status on success; the caller
/// decides what a mismatch means. On mismatch no tables are fetched, and a
/// report that errors partway leaves no artifact behind: both tables are
/// fetched first and written together, or not at all.
fn scrape_one(
    report: &Report,
    opts: &ScrapeOptions,
    check: &mut CompCheck,
    artifacts: &mut Vec<PathBuf>,
) -> Result<CompStatus, Box<dyn Error>> {
    // Summary page first: the composition decides whether the stat
    // tables are worth fetching at all.
    let summary_html = net::fetch_until(&report.summary_path(opts.filter), summary::ENTRY_CLASS)?;
    let jobs = summary::extract_jobs(&summary_html);
    if jobs.is_empty() {
        return Err("no composition entries on summary page".into());
    }

    let status = check.check(&Composition::new(jobs));
    if status == CompStatus::Mismatch {
        return Ok(status);
    }

    pause();
    let damage = fetch_metric(report, opts, MetricKind::DamageDone)?;
    pause();
    let healing = fetch_metric(report, opts, MetricKind::HealingDone)?;

    let written = store::write_report_artifacts(&opts.csv_dir, report, &damage, &healing)?;
    logd!(
        "Scrape: {} → {} artifact(s), {}+{} rows",
        report.code(), written.len(), damage.row_count(), healing.row_count()
    );
    artifacts.extend(written);

    Ok(status)
}

fn pause() {
    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
}

fn fetch_metric(
    report: &Report,
    opts: &ScrapeOptions,
    kind: MetricKind,
) -> Result<DataSet, Box<dyn Error>> {
    let path = report.metric_path(opts.filter, kind);
    let html = net::fetch_until(&path, metrics::TABLE_MARKER)?;
    metrics::extract_table(&html, kind)
}
