// src/analysis/identification.rs
//! Cross-scene comparison of how same-function controls are labelled.
//!
//! Elements are bucketed by function through the vocabulary's name
//! fragments; anything unbucketed is grouped by kind and object name.
//! The first occurrence in corpus order sets the expected label and icon.

use std::collections::{BTreeMap, BTreeSet};

use super::{element_subject, AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::{extract_interactive_elements, InteractiveElement};
use crate::types::{criteria, Criterion, Finding, Severity};

/// 3.2.4: same function, same name and icon, everywhere.
pub struct ConsistentIdentification;

struct Occurrence<'a> {
    scene_index: usize,
    scene: &'a str,
    element: InteractiveElement,
}

impl Analyzer for ConsistentIdentification {
    fn criterion(&self) -> Criterion {
        criteria::CONSISTENT_IDENTIFICATION
    }

    fn name(&self) -> &'static str {
        "Consistent Identification"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut buckets: BTreeMap<String, Vec<Occurrence<'_>>> = BTreeMap::new();
        for (scene_index, doc) in corpus.iter().enumerate() {
            for element in extract_interactive_elements(doc) {
                let key = bucket_key(&element, ctx);
                buckets.entry(key).or_default().push(Occurrence {
                    scene_index,
                    scene: doc.path(),
                    element,
                });
            }
        }

        buckets
            .iter()
            .filter(|(_, occurrences)| spans_scenes(occurrences))
            .flat_map(|(bucket, occurrences)| compare_bucket(bucket, occurrences))
            .collect()
    }
}

fn bucket_key(element: &InteractiveElement, ctx: &AnalysisContext<'_>) -> String {
    match ctx.vocabulary.bucket_for(&element.name) {
        Some(bucket) => format!("function:{bucket}"),
        None => format!("{}:{}", element.kind.label(), element.name),
    }
}

fn spans_scenes(occurrences: &[Occurrence<'_>]) -> bool {
    occurrences.iter().map(|o| o.scene_index).collect::<BTreeSet<_>>().len() >= 2
}

fn compare_bucket(bucket: &str, occurrences: &[Occurrence<'_>]) -> Vec<Finding> {
    let Some(first) = occurrences.first() else {
        return Vec::new();
    };
    let mut findings = Vec::new();

    let expected = first.element.label.trim();
    for o in occurrences.iter().filter(|o| o.element.label.trim() != expected) {
        findings.push(Finding::new(
            &criteria::CONSISTENT_IDENTIFICATION,
            Severity::Medium,
            o.scene,
            element_subject(&o.element),
            format!(
                "'{}' control is labelled '{}' here but '{}' in {}",
                display_bucket(bucket),
                o.element.label.trim(),
                expected,
                first.scene
            ),
            "Use the same label for controls that do the same thing across screens",
        ));
    }

    let icon_base = occurrences.iter().find_map(|o| o.element.icon.as_deref().map(|icon| (icon, o.scene)));
    if let Some((expected_icon, base_scene)) = icon_base {
        for o in occurrences
            .iter()
            .filter(|o| o.element.icon.as_deref().is_some_and(|i| i != expected_icon))
        {
            findings.push(Finding::new(
                &criteria::CONSISTENT_IDENTIFICATION,
                Severity::Low,
                o.scene,
                format!("{} (icon)", element_subject(&o.element)),
                format!(
                    "'{}' control uses a different icon than in {}",
                    display_bucket(bucket),
                    base_scene
                ),
                "Use the same sprite for controls that do the same thing across screens",
            ));
        }
    }

    findings
}

fn display_bucket(bucket: &str) -> &str {
    bucket.strip_prefix("function:").unwrap_or(bucket)
}
