// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::report::Report;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which per-player stat table a page/artifact holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    DamageDone,
    HealingDone,
}

impl MetricKind {
    pub fn title(self) -> &'static str {
        match self {
            MetricKind::DamageDone => "Damage Done",
            MetricKind::HealingDone => "Healing Done",
        }
    }

    /// Stem used for artifacts, cache files and exports.
    pub fn file_stem(self) -> &'static str {
        match self {
            MetricKind::DamageDone => "damage",
            MetricKind::HealingDone => "healing",
        }
    }

    /// Header cell that identifies a table of this kind (exact match).
    pub fn marker_column(self) -> &'static str {
        match self {
            MetricKind::DamageDone => "DPS",
            MetricKind::HealingDone => "HPS",
        }
    }

    /// `type=` query value on the site.
    pub fn type_query(self) -> &'static str {
        match self {
            MetricKind::DamageDone => "damage-done",
            MetricKind::HealingDone => "healing",
        }
    }
}

/// Which encounters of a report feed the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EncounterFilter {
    #[default]
    All,
    Kills,
    Wipes,
}

impl EncounterFilter {
    /// Extra query parameter, if any. The site reads no parameter as "all".
    pub fn query(self) -> Option<&'static str> {
        match self {
            EncounterFilter::All => None,
            EncounterFilter::Kills => Some("wipes=2"),
            EncounterFilter::Wipes => Some("wipes=1"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EncounterFilter::All => "All encounters",
            EncounterFilter::Kills => "Kills only",
            EncounterFilter::Wipes => "Wipes only",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub reports: Vec<Report>,
    pub filter: EncounterFilter,
    /// Where per-report CSV artifacts land (cleared before each run).
    pub csv_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            filter: EncounterFilter::All,
            csv_dir: PathBuf::from(DEFAULT_CSV_DIR),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Exports always produce one file per metric inside a target directory;
/// stems are fixed (`damage`, `healing`), the format controls the extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SUMMARY_SUBDIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    /// Parse GUI/CLI text into the target directory. A trailing filename is
    /// tolerated and ignored; stems are fixed per metric.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SUMMARY_SUBDIR);
        } else {
            self.out_dir = PathBuf::from(s);
        }
    }

    pub fn out_path(&self, kind: MetricKind) -> PathBuf {
        let mut path = self.out_dir.clone();
        path.push(join!(kind.file_stem(), ".", self.format.ext()));
        path
    }
}
