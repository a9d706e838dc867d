// src/analysis/focus_order.rs
//! Declared focus order against visual reading order.
//!
//! Declared order is a static proxy: explicit navigation links when present,
//! declaration order otherwise. It is not the engine's runtime traversal.

use super::{element_subject, AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::{
    extract_declared_focus_order, extract_interactive_elements, extract_visual_order_with_band, InteractiveElement,
};
use crate::scene::SceneDocument;
use crate::types::{criteria, Criterion, Finding, Severity};

/// 2.4.3: one finding per scene whose focus order diverges.
pub struct FocusOrder;

impl Analyzer for FocusOrder {
    fn criterion(&self) -> Criterion {
        criteria::FOCUS_ORDER
    }

    fn name(&self) -> &'static str {
        "Focus Order"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        corpus.iter().filter_map(|doc| check_scene(doc, ctx)).collect()
    }
}

fn check_scene(doc: &SceneDocument, ctx: &AnalysisContext<'_>) -> Option<Finding> {
    let elements = extract_interactive_elements(doc);
    if elements.len() < 2 {
        return None;
    }
    let visual = extract_visual_order_with_band(&elements, ctx.rules.row_band);
    let declared = extract_declared_focus_order(&elements, doc);

    let (first, _) = declared
        .iter()
        .zip(&visual)
        .find(|(d, v)| d.game_object_id != v.game_object_id)?;

    Some(Finding::new(
        &criteria::FOCUS_ORDER,
        Severity::High,
        doc.path(),
        element_subject(first),
        format!(
            "Focus order [{}] does not follow visual order [{}]",
            join_names(&declared),
            join_names(&visual)
        ),
        "Reorder the objects in the hierarchy or set explicit navigation so focus moves top-to-bottom, left-to-right",
    ))
}

fn join_names(order: &[InteractiveElement]) -> String {
    order.iter().map(element_subject).collect::<Vec<_>>().join(", ")
}
