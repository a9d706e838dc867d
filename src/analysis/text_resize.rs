// src/analysis/text_resize.rs
//! Static text-resize risk. Nothing is rendered or measured: a text inside a
//! fixed-size rect with nothing that lets it grow is only a candidate for
//! clipping.

use serde_yaml::Value;

use super::{AnalysisContext, Analyzer, SceneCorpus};
use crate::config::Vocabulary;
use crate::scene::{ComponentKind, ComponentNode, GameObjectNode, SceneDocument};
use crate::types::{criteria, Criterion, Finding, Severity};

/// 1.4.4: text should survive being enlarged.
pub struct TextResize;

impl Analyzer for TextResize {
    fn criterion(&self) -> Criterion {
        criteria::RESIZE_TEXT
    }

    fn name(&self) -> &'static str {
        "Text Resize Risk"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        corpus.iter().flat_map(|doc| check_scene(doc, ctx.vocabulary)).collect()
    }
}

fn check_scene(doc: &SceneDocument, vocabulary: &Vocabulary) -> Vec<Finding> {
    doc.objects()
        .iter()
        .filter(|obj| at_risk(doc, obj, vocabulary))
        .map(|obj| {
            let subject = if obj.name.is_empty() { format!("#{}", obj.id) } else { obj.name.clone() };
            Finding::new(
                &criteria::RESIZE_TEXT,
                Severity::Medium,
                doc.path(),
                subject,
                "Text sits in a fixed-size container with no flexible layout and may clip when enlarged (requires runtime verification)",
                "Add a ContentSizeFitter or layout group, or enable auto-sizing, then check the screen at 200% text size",
            )
        })
        .collect()
}

fn at_risk(doc: &SceneDocument, obj: &GameObjectNode, vocabulary: &Vocabulary) -> bool {
    let Some(text) = obj.text_component() else {
        return false;
    };
    if obj.text().map_or(true, |t| t.trim().is_empty()) {
        return false;
    }
    if !obj.transform.is_some_and(|r| r.is_fixed_size()) {
        return false;
    }
    if auto_sizes(text) {
        return false;
    }
    !(has_flexible_marker(obj, vocabulary) || doc.parent(obj).is_some_and(|p| has_flexible_marker(p, vocabulary)))
}

/// Best Fit (Unity UI) or Auto Size (TextMeshPro).
fn auto_sizes(text: &ComponentNode) -> bool {
    match text.kind() {
        ComponentKind::TextMeshPro => text.flag("m_enableAutoSizing"),
        _ => text
            .field("m_FontData")
            .and_then(|fd| fd.get("m_BestFit"))
            .and_then(Value::as_i64)
            .is_some_and(|v| v != 0),
    }
}

fn has_flexible_marker(obj: &GameObjectNode, vocabulary: &Vocabulary) -> bool {
    obj.components.iter().any(|c| vocabulary.is_flexible_marker(c.kind().label()))
}
