// src/runner.rs
// The full pipeline both frontends call: scrape reports into CSV
// artifacts, ingest them back, fold them into the two summary tables
// and cache those under .store for instant reopening.

use std::error::Error;

use crate::{
    combine,
    config::options::{MetricKind, ScrapeOptions},
    ingest,
    progress::Progress,
    scrape::{self, ScrapeRun},
    store::{self, DataSet},
};

/// Everything a pipeline run produced.
pub struct PipelineResult {
    pub run: ScrapeRun,
    pub damage: DataSet,
    pub healing: DataSet,
}

/// Scrape, ingest, summarize, cache. Fails only when the whole run is
/// unusable (setup trouble or not a single report scraped); individual
/// report failures are carried in `run.outcomes`.
pub fn scrape_and_summarize(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<PipelineResult, Box<dyn Error>> {
    let run = scrape::collect_reports(opts, progress)?;
    if run.scraped_count() == 0 {
        return Err("no report could be scraped".into());
    }

    let (damage, healing) = summarize_artifacts(opts)?;
    Ok(PipelineResult { run, damage, healing })
}

/// Ingest whatever artifacts are on disk and rebuild both summaries.
/// Also usable standalone for offline reruns over an existing CSV dir.
pub fn summarize_artifacts(opts: &ScrapeOptions) -> Result<(DataSet, DataSet), Box<dyn Error>> {
    let (damage_tables, healing_tables) = ingest::load_artifacts(&opts.csv_dir)?;

    let damage = combine::summarize_damage(&damage_tables)?;
    let healing = combine::summarize_healing(&healing_tables)?;

    store::save_summary(MetricKind::DamageDone, &damage)?;
    store::save_summary(MetricKind::HealingDone, &healing)?;
    logf!(
        "Runner: summaries built ({} damage rows, {} healing rows)",
        damage.row_count(), healing.row_count()
    );

    Ok((damage, healing))
}
