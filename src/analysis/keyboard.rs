// src/analysis/keyboard.rs
use super::{element_subject, AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::{extract_interactive_elements, NavigationMode};
use crate::types::{criteria, Criterion, Finding, Severity};

/// 2.1.1: interactable controls must be reachable without a pointer.
///
/// Navigation mode `None` removes a selectable from keyboard and gamepad
/// traversal entirely.
pub struct KeyboardReachability;

impl Analyzer for KeyboardReachability {
    fn criterion(&self) -> Criterion {
        criteria::KEYBOARD
    }

    fn name(&self) -> &'static str {
        "Keyboard Reachability"
    }

    fn analyze(&self, corpus: &SceneCorpus, _ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for doc in corpus {
            for element in extract_interactive_elements(doc) {
                if !element.interactable || element.navigation_mode != NavigationMode::None {
                    continue;
                }
                findings.push(Finding::new(
                    &criteria::KEYBOARD,
                    Severity::High,
                    doc.path(),
                    element_subject(&element),
                    format!("{} has navigation disabled and cannot be reached by keyboard", element.kind.label()),
                    "Set the Selectable's navigation to Automatic or Explicit",
                ));
            }
        }
        findings
    }
}
