// src/reporting/json.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::aggregate::AggregatedReport;

/// File name used when a report is written to an output directory.
pub const REPORT_FILE: &str = "sceneaudit-report.json";

/// Pretty JSON: `findingsByCategory`, `counts` and `warnings`.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &AggregatedReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing report")
}

/// Writes the JSON report into `dir`, creating it if needed.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub fn write_to_dir(report: &AggregatedReport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(REPORT_FILE);
    fs::write(&path, render(report)?).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
