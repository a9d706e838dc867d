// src/analysis/labels.rs
use super::{element_subject, AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::extract_interactive_elements;
use crate::scene::SceneDocument;
use crate::types::{criteria, Criterion, Finding, Severity};

/// 2.4.6: controls carry descriptive labels and headings carry text.
pub struct HeadingsAndLabels;

impl Analyzer for HeadingsAndLabels {
    fn criterion(&self) -> Criterion {
        criteria::HEADINGS_AND_LABELS
    }

    fn name(&self) -> &'static str {
        "Headings & Labels"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        corpus.iter().flat_map(|doc| check_scene(doc, ctx)).collect()
    }
}

fn check_scene(doc: &SceneDocument, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for element in extract_interactive_elements(doc) {
        let subject = element_subject(&element);
        if !element.label_source.is_associated() {
            findings.push(Finding::new(
                &criteria::HEADINGS_AND_LABELS,
                Severity::High,
                doc.path(),
                subject,
                format!("{} has no associated label", element.kind.label()),
                "Give the control visible text or an accessibility label; an object name is not announced",
            ));
        } else if ctx.vocabulary.is_vague(&element.label) {
            findings.push(Finding::new(
                &criteria::HEADINGS_AND_LABELS,
                Severity::Medium,
                doc.path(),
                subject,
                format!("Label '{}' does not describe the {}'s purpose", element.label.trim(), element.kind.label()),
                "Use a label that says what the control does, e.g. 'Save Document' instead of 'OK'",
            ));
        }
    }

    let is_heading = ctx.vocabulary.title_matcher();
    for obj in doc.objects().iter().filter(|o| is_heading(&o.name)) {
        if obj.text_component().is_none() {
            continue;
        }
        if obj.text().is_some_and(|t| !t.trim().is_empty()) {
            continue;
        }
        findings.push(Finding::new(
            &criteria::HEADINGS_AND_LABELS,
            Severity::Medium,
            doc.path(),
            obj.name.clone(),
            format!("Heading '{}' has empty text", obj.name),
            "Give the heading text that describes the section it introduces",
        ));
    }

    findings
}
