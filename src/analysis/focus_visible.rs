// src/analysis/focus_visible.rs
use super::{element_subject, AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::elements::interactive_kind;
use crate::extract::{extract_interactive_elements, ElementKind, InteractiveElement, NavigationMode};
use crate::scene::component::{color, file_ref};
use crate::scene::{ComponentNode, Rgba, SceneDocument};
use crate::types::{criteria, Criterion, Finding, Severity};

/// Colour channels closer than this are treated as equal.
const COLOR_TOLERANCE: f64 = 1e-3;

/// `Selectable.Transition` values as serialized in `m_Transition`.
const TRANSITION_NONE: i64 = 0;
const TRANSITION_COLOR_TINT: i64 = 1;
const TRANSITION_SPRITE_SWAP: i64 = 2;

/// 2.4.7: a focused control must look different from an unfocused one.
///
/// Reads the Selectable's transition settings. Animation transitions and
/// missing fields are left alone since the selected state cannot be judged
/// without running the scene.
pub struct FocusVisible;

impl Analyzer for FocusVisible {
    fn criterion(&self) -> Criterion {
        criteria::FOCUS_VISIBLE
    }

    fn name(&self) -> &'static str {
        "Focus Visible"
    }

    fn analyze(&self, corpus: &SceneCorpus, _ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for doc in corpus {
            for element in extract_interactive_elements(doc) {
                if let Some(problem) = check_element(doc, &element) {
                    findings.push(Finding::new(
                        &criteria::FOCUS_VISIBLE,
                        Severity::Medium,
                        doc.path(),
                        element_subject(&element),
                        format!("{} {problem}", element.kind.label()),
                        "Give the Selectable a selected state that differs from its normal state, \
                         such as a distinct selected colour or sprite",
                    ));
                }
            }
        }
        findings
    }
}

/// Describes why the element shows no focus change, if it shows none.
fn check_element(doc: &SceneDocument, element: &InteractiveElement) -> Option<&'static str> {
    // Disabled and unreachable controls never take focus.
    if element.kind == ElementKind::Link
        || !element.interactable
        || element.navigation_mode == NavigationMode::None
    {
        return None;
    }
    let obj = doc.object(element.game_object_id)?;
    let (_, selectable) = interactive_kind(obj)?;
    let selectable = selectable?;

    match selectable.i64_field("m_Transition")? {
        TRANSITION_NONE => Some("has no selection transition, so focus is not shown"),
        TRANSITION_COLOR_TINT => {
            let colors = selectable.field("m_Colors")?;
            let normal = colors.get("m_NormalColor").and_then(color)?;
            let selected = colors.get("m_SelectedColor").and_then(color)?;
            same_color(normal, selected).then_some("uses the same colour when selected as when idle")
        }
        TRANSITION_SPRITE_SWAP => {
            (!has_selected_sprite(selectable)).then_some("swaps sprites but defines no selected sprite")
        }
        _ => None,
    }
}

fn has_selected_sprite(selectable: &ComponentNode) -> bool {
    selectable
        .field("m_SpriteState")
        .and_then(|s| s.get("m_SelectedSprite"))
        .and_then(file_ref)
        .is_some()
}

fn same_color(a: Rgba, b: Rgba) -> bool {
    [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)]
        .iter()
        .all(|(x, y)| (x - y).abs() < COLOR_TOLERANCE)
}
