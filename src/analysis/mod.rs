// src/analysis/mod.rs
//! Criterion analyzers.
//!
//! Each analyzer targets one success criterion and turns the extractor views
//! of a [`SceneCorpus`] into findings. Analyzers never share state and never
//! fail: missing data is either ignored or reported as a finding.

pub mod contrast;
pub mod engine;
pub mod focus_order;
pub mod focus_visible;
pub mod identification;
pub mod keyboard;
pub mod labels;
pub mod navigation;
pub mod text_resize;
pub mod titling;

pub use engine::run_all;

use crate::config::{Config, RuleConfig, Vocabulary};
use crate::extract::InteractiveElement;
use crate::scene::SceneDocument;
use crate::types::{Criterion, Finding};

/// Ordered scenes analyzed together. Order is the caller's, never the
/// file system's, so cross-scene baselines are reproducible.
#[derive(Debug, Clone, Default)]
pub struct SceneCorpus {
    documents: Vec<SceneDocument>,
}

impl SceneCorpus {
    #[must_use]
    pub fn new(documents: Vec<SceneDocument>) -> Self {
        Self { documents }
    }

    #[must_use]
    pub fn documents(&self) -> &[SceneDocument] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneDocument> {
        self.documents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a SceneCorpus {
    type Item = &'a SceneDocument;
    type IntoIter = std::slice::Iter<'a, SceneDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Read-only inputs shared by every analyzer in a run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub vocabulary: &'a Vocabulary,
    pub rules: &'a RuleConfig,
}

impl<'a> AnalysisContext<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, rules: &'a RuleConfig) -> Self {
        Self { vocabulary, rules }
    }

    #[must_use]
    pub fn from_config(config: &'a Config) -> Self {
        Self::new(&config.vocabulary, &config.rules)
    }
}

/// Trait implemented by all analyzers.
pub trait Analyzer: Send + Sync {
    /// The criterion every finding of this analyzer carries. Its id doubles
    /// as the analyzer's stable id.
    fn criterion(&self) -> Criterion;

    /// Human-readable name of this analyzer.
    fn name(&self) -> &'static str;

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding>;
}

/// Every analyzer, in criterion order.
#[must_use]
pub fn all_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(contrast::TextContrast),
        Box::new(text_resize::TextResize),
        Box::new(keyboard::KeyboardReachability),
        Box::new(titling::SceneTitling),
        Box::new(focus_order::FocusOrder),
        Box::new(focus_visible::FocusVisible),
        Box::new(labels::HeadingsAndLabels),
        Box::new(navigation::ConsistentNavigation),
        Box::new(identification::ConsistentIdentification),
    ]
}

/// Analyzers not switched off through `rules.disabled`.
#[must_use]
pub fn enabled_analyzers(rules: &RuleConfig) -> Vec<Box<dyn Analyzer>> {
    all_analyzers()
        .into_iter()
        .filter(|a| !rules.is_disabled(a.criterion().id))
        .collect()
}

/// Display name for an element; unnamed objects fall back to their id.
pub(crate) fn element_subject(element: &InteractiveElement) -> String {
    if element.name.trim().is_empty() {
        format!("#{}", element.game_object_id)
    } else {
        element.name.clone()
    }
}
