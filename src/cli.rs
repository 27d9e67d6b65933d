// src/cli.rs
use std::{env, error::Error};

use crate::{
    config::options::{EncounterFilter, ExportFormat, ExportOptions, MetricKind, ScrapeOptions},
    file, runner,
    progress::Progress,
    report::Report,
    scrape::LogOutcome,
};

struct Params {
    scrape: ScrapeOptions,
    export: ExportOptions,
    offline: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
            offline: false,
        }
    }
}

/// Progress sink printing one line per event to stderr, keeping stdout
/// clean for the summary tables.
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {} report(s)…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, index: usize, code: &str) {
        eprintln!("[{}/{}] {} ok", index + 1, self.total, code);
    }
    fn item_skipped(&mut self, index: usize, code: &str, why: &str) {
        eprintln!("[{}/{}] {} skipped: {}", index + 1, self.total, code, why);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    // only program name: fall back to the GUI
    if env::args().len() == 1 {
        return crate::gui::run(Default::default());
    }

    let params = parse_cli()?;

    let (damage, healing) = if params.offline {
        runner::summarize_artifacts(&params.scrape)?
    } else {
        let mut progress = ConsoleProgress { total: 0 };
        let result = runner::scrape_and_summarize(&params.scrape, Some(&mut progress))?;

        for (report, outcome) in &result.run.outcomes {
            if let LogOutcome::CompMismatch = outcome {
                eprintln!("Note: {} has a different group composition; its data was left out.", report.code());
            }
        }
        (result.damage, result.healing)
    };

    for (kind, ds) in [(MetricKind::DamageDone, &damage), (MetricKind::HealingDone, &healing)] {
        let path = file::write_export(&params.export, kind, ds)?;
        eprintln!("Wrote {}", path.display());
        print_table(kind, ds);
    }

    Ok(())
}

fn print_table(kind: MetricKind, ds: &crate::store::DataSet) {
    println!("# {}", kind.title());
    if let Some(h) = &ds.headers {
        println!("{}", h.join(","));
    }
    for row in &ds.rows {
        println!("{}", row.join(","));
    }
    println!();
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--all" => params.scrape.filter = EncounterFilter::All,
            "--kills" => params.scrape.filter = EncounterFilter::Kills,
            "--wipes" => params.scrape.filter = EncounterFilter::Wipes,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                params.export.set_dir(&v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.export.include_headers = true,
            "--no-headers" => params.export.include_headers = false,
            "--offline" => params.offline = true,
            "--csv-dir" => {
                let v = args.next().ok_or("Missing value for --csv-dir")?;
                params.scrape.csv_dir = file::normalize_separators(&v).into();
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                params.scrape.reports.push(Report::parse(other)?);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !params.offline && params.scrape.reports.is_empty() {
        return Err("No report URLs given (or use --offline to reuse existing data)".into());
    }
    if params.offline && !params.scrape.reports.is_empty() {
        return Err("--offline takes no report URLs".into());
    }

    Ok(params)
}
