// src/analysis/engine.rs
use rayon::prelude::*;
use tracing::debug;

use super::{AnalysisContext, Analyzer, SceneCorpus};
use crate::types::Finding;

/// Runs `analyzers` over the corpus in parallel.
///
/// The result holds one list per analyzer, in the order given; the
/// aggregator sorts afterwards, so execution order never shows.
#[must_use]
pub fn run_all(
    analyzers: &[Box<dyn Analyzer>],
    corpus: &SceneCorpus,
    ctx: &AnalysisContext<'_>,
) -> Vec<Vec<Finding>> {
    analyzers
        .par_iter()
        .map(|analyzer| {
            let findings = analyzer.analyze(corpus, ctx);
            debug!(
                analyzer = analyzer.name(),
                criterion = analyzer.criterion().id,
                findings = findings.len(),
                "analyzer finished"
            );
            findings
        })
        .collect()
}
