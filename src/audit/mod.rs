// src/audit/mod.rs
//! End-to-end audit: parse scenes, run analyzers, aggregate.
//!
//! A scene that cannot be read or parsed becomes a warning in the report and
//! contributes no findings. Only a malformed finding aborts a run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::aggregate::{aggregate_with_warnings, AggregatedReport};
use crate::analysis::{enabled_analyzers, run_all, AnalysisContext, SceneCorpus};
use crate::config::Config;
use crate::discovery::{self, normalize_path};
use crate::error::SceneAuditError;
use crate::scene::{parse_scene, SceneDocument};
use crate::types::{Finding, SceneWarning, Severity};

/// Options for [`run_project`].
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// JSON file holding precomputed findings (`[Finding, ...]`) to merge.
    pub visual_findings: Option<PathBuf>,
    /// Overrides `rules.fail_on` from the config file.
    pub fail_on: Option<Severity>,
}

/// Result of an audit run.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: AggregatedReport,
    pub scenes_given: usize,
    pub scenes_analyzed: usize,
    /// Severity at or above which the run counts as failed.
    pub fail_on: Option<Severity>,
}

impl AuditOutcome {
    /// True when scenes were given (or none were found) and none parsed.
    #[must_use]
    pub fn nothing_analyzable(&self) -> bool {
        self.scenes_analyzed == 0
    }

    /// True when a finding reaches the `fail_on` threshold.
    #[must_use]
    pub fn threshold_exceeded(&self) -> bool {
        match (self.fail_on, self.report.max_severity()) {
            (Some(limit), Some(worst)) => worst >= limit,
            _ => false,
        }
    }
}

/// Audits `paths` in the order given.
///
/// # Errors
/// Fails only when a finding breaks the finding contract; see
/// [`crate::aggregate::aggregate`].
pub fn run(paths: &[PathBuf], config: &Config, visual_findings: Vec<Finding>) -> crate::error::Result<AuditOutcome> {
    let loaded: Vec<std::result::Result<SceneDocument, SceneWarning>> =
        paths.par_iter().map(|p| load_scene(p)).collect();

    let mut documents = Vec::with_capacity(loaded.len());
    let mut warnings = Vec::new();
    for item in loaded {
        match item {
            Ok(doc) => documents.push(doc),
            Err(warning) => warnings.push(warning),
        }
    }

    let corpus = SceneCorpus::new(documents);
    let ctx = AnalysisContext::from_config(config);
    let analyzers = enabled_analyzers(&config.rules);
    let mut lists = run_all(&analyzers, &corpus, &ctx);
    lists.push(visual_findings);

    let report = aggregate_with_warnings(&lists, warnings)?;
    let counts = report.counts();
    info!(
        scenes = paths.len(),
        analyzed = corpus.len(),
        analyzers = analyzers.len(),
        critical = counts.critical,
        high = counts.high,
        medium = counts.medium,
        low = counts.low,
        "audit complete"
    );

    Ok(AuditOutcome {
        report,
        scenes_given: paths.len(),
        scenes_analyzed: corpus.len(),
        fail_on: config.rules.fail_on,
    })
}

/// Loads config from `root`, discovers scenes and audits them.
///
/// # Errors
/// Returns error on a malformed config, an unreadable or invalid visual
/// findings file, or a malformed finding.
pub fn run_project(root: &Path, options: &AuditOptions) -> Result<AuditOutcome> {
    let config = Config::load(root)?;
    let paths = discovery::discover(root, &config);
    let visual = match &options.visual_findings {
        Some(path) => load_visual_findings(path)?,
        None => Vec::new(),
    };

    let mut outcome = run(&paths, &config, visual)?;
    if options.fail_on.is_some() {
        outcome.fail_on = options.fail_on;
    }
    Ok(outcome)
}

/// Reads precomputed findings from a JSON array.
///
/// # Errors
/// Returns error if the file cannot be read or is not a finding array.
pub fn load_visual_findings(path: &Path) -> Result<Vec<Finding>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading visual findings {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing visual findings {}", path.display()))
}

fn load_scene(path: &Path) -> std::result::Result<SceneDocument, SceneWarning> {
    let scene = normalize_path(path);
    let parsed = fs::read_to_string(path)
        .map_err(|source| SceneAuditError::Io {
            source,
            path: path.to_path_buf(),
        })
        .and_then(|raw| parse_scene(&scene, &raw));

    parsed.map_err(|e| {
        warn!(scene = %scene, error = %e, "skipping scene");
        SceneWarning::from_error(&scene, &e)
    })
}
