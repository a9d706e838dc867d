// src/aggregate/mod.rs
//! Merges analyzer output into one deduplicated, severity-ranked report.

pub mod categories;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

pub use categories::{category_for, CATEGORIES, OTHER};

use crate::error::{Result, SceneAuditError};
use crate::types::{Finding, SceneWarning, Severity};

static CRITERION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Issue counts by severity. Always derived from the report's findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// The unified report.
///
/// Serializes as `{ findingsByCategory, counts, warnings }` with every
/// category key present.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedReport {
    findings_by_category: BTreeMap<String, Vec<Finding>>,
    warnings: Vec<SceneWarning>,
}

impl Default for AggregatedReport {
    fn default() -> Self {
        Self {
            findings_by_category: CATEGORIES.iter().map(|c| ((*c).to_string(), Vec::new())).collect(),
            warnings: Vec::new(),
        }
    }
}

impl AggregatedReport {
    #[must_use]
    pub fn findings_by_category(&self) -> &BTreeMap<String, Vec<Finding>> {
        &self.findings_by_category
    }

    /// Findings of one category; empty for unknown names.
    #[must_use]
    pub fn category(&self, name: &str) -> &[Finding] {
        self.findings_by_category.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn warnings(&self) -> &[SceneWarning] {
        &self.warnings
    }

    /// All findings, category by category in presentation order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        CATEGORIES.iter().flat_map(|c| self.category(c))
    }

    #[must_use]
    pub fn counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for f in self.findings() {
            match f.severity() {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Info => {}
            }
        }
        counts
    }

    #[must_use]
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings().map(Finding::severity).max()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.counts().total() == 0
    }
}

impl Serialize for AggregatedReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AggregatedReport", 3)?;
        state.serialize_field("findingsByCategory", &self.findings_by_category)?;
        state.serialize_field("counts", &self.counts())?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

/// Merges finding lists into a report.
///
/// # Errors
/// Returns [`SceneAuditError::AggregationInput`] for a finding with an empty
/// field or a criterion that is not a dotted `x.y.z` identifier.
pub fn aggregate(finding_lists: &[Vec<Finding>]) -> Result<AggregatedReport> {
    aggregate_with_warnings(finding_lists, Vec::new())
}

/// [`aggregate`], carrying scene warnings into the report.
///
/// # Errors
/// See [`aggregate`].
pub fn aggregate_with_warnings(finding_lists: &[Vec<Finding>], warnings: Vec<SceneWarning>) -> Result<AggregatedReport> {
    let flat: Vec<&Finding> = finding_lists.iter().flatten().collect();
    for (index, finding) in flat.iter().enumerate() {
        validate(index, finding)?;
    }

    let issues: Vec<&Finding> = flat.iter().copied().filter(|f| f.severity().is_issue()).collect();
    let dropped = flat.len() - issues.len();

    let mut kept: Vec<&Finding> = Vec::with_capacity(issues.len());
    let mut slot: HashMap<(&str, &str, &str), usize> = HashMap::new();
    for finding in issues {
        match slot.get(&finding.dedup_key()) {
            Some(&i) => {
                if finding.severity() > kept[i].severity() {
                    kept[i] = finding;
                }
            }
            None => {
                slot.insert(finding.dedup_key(), kept.len());
                kept.push(finding);
            }
        }
    }

    let mut report = AggregatedReport { warnings, ..AggregatedReport::default() };
    for finding in kept {
        report
            .findings_by_category
            .entry(category_for(finding.criterion()).to_string())
            .or_default()
            .push(finding.clone());
    }
    for findings in report.findings_by_category.values_mut() {
        findings.sort_by(report_order);
    }

    debug!(
        received = flat.len(),
        informational = dropped,
        kept = report.counts().total(),
        "aggregated findings"
    );
    Ok(report)
}

fn validate(index: usize, finding: &Finding) -> Result<()> {
    let fail = |reason: &str| SceneAuditError::AggregationInput { index, reason: reason.to_string() };
    if !CRITERION_RE.is_match(finding.criterion()) {
        return Err(fail("criterion is not a dotted identifier"));
    }
    if finding.scene().trim().is_empty() {
        return Err(fail("scene is empty"));
    }
    if finding.subject().trim().is_empty() {
        return Err(fail("subject is empty"));
    }
    if finding.message().trim().is_empty() {
        return Err(fail("message is empty"));
    }
    Ok(())
}

/// Severity descending, then scene, subject, criterion and message ascending.
fn report_order(a: &Finding, b: &Finding) -> Ordering {
    b.severity()
        .cmp(&a.severity())
        .then_with(|| a.scene().cmp(b.scene()))
        .then_with(|| a.subject().cmp(b.subject()))
        .then_with(|| a.criterion().cmp(b.criterion()))
        .then_with(|| a.message().cmp(b.message()))
}
