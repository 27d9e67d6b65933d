// src/file.rs

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::{ExportOptions, MetricKind};
use crate::csv::to_export_string;
use crate::store::DataSet;

/// Write one metric's summary according to ExportOptions (target dir,
/// headers policy, delimiter). Returns the path written to.
pub fn write_export(
    export: &ExportOptions,
    kind: MetricKind,
    ds: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path(kind);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        &ds.headers,
        &ds.rows,
        export.include_headers,
        export.format.delim(),
    );

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
