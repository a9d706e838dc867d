// src/extract/elements.rs
//! Interactive element extraction and label resolution.

use std::collections::{HashMap, HashSet};

use serde_yaml::Value;

use super::{ElementKind, InteractiveElement, LabelSource, NavLinks, NavigationMode, ScreenPosition};
use crate::scene::component::{file_ref, scalar_string};
use crate::scene::{strip_rich_text, ComponentKind, ComponentNode, FileId, GameObjectNode, SceneDocument};

/// Selectable kinds that make an object interactive, in priority order.
const SELECTABLES: &[(ComponentKind, ElementKind)] = &[
    (ComponentKind::Button, ElementKind::Button),
    (ComponentKind::Toggle, ElementKind::Toggle),
    (ComponentKind::Slider, ElementKind::Slider),
    (ComponentKind::InputField, ElementKind::InputField),
    (ComponentKind::Dropdown, ElementKind::Dropdown),
];

/// Keys an accessibility component may use for its label.
const ACCESSIBILITY_LABEL_KEYS: &[&str] = &["m_AccessibilityLabel", "accessibilityLabel", "m_Label"];

/// Selectable fields pointing at texts that never label the control.
const NOT_LABEL_REFS: &[&str] = &["m_TextComponent", "m_Placeholder"];

/// Rich-text tag that turns a TextMeshPro text into a link.
const LINK_TAG: &str = "<link";

/// Returns every interactive element of the document, in declaration order.
#[must_use]
pub fn extract_interactive_elements(doc: &SceneDocument) -> Vec<InteractiveElement> {
    let owners = component_owners(doc);
    doc.objects()
        .iter()
        .enumerate()
        .filter_map(|(index, obj)| build_element(doc, obj, index, &owners))
        .collect()
}

/// The selectable component and element kind of an object, if it is interactive.
#[must_use]
pub fn interactive_kind(obj: &GameObjectNode) -> Option<(ElementKind, Option<&ComponentNode>)> {
    for (component, kind) in SELECTABLES {
        if let Some(c) = obj.component(*component) {
            return Some((*kind, Some(c)));
        }
    }
    let tmp = obj.component(ComponentKind::TextMeshPro)?;
    tmp.str_field("m_text")
        .is_some_and(|t| t.contains(LINK_TAG))
        .then_some((ElementKind::Link, None))
}

fn build_element(
    doc: &SceneDocument,
    obj: &GameObjectNode,
    index: usize,
    owners: &HashMap<FileId, FileId>,
) -> Option<InteractiveElement> {
    let (kind, selectable) = interactive_kind(obj)?;
    let (label, label_source) = resolve_label(doc, obj, selectable);
    let nav = selectable.and_then(|s| s.field("m_Navigation"));

    Some(InteractiveElement {
        game_object_id: obj.id,
        name: obj.name.clone(),
        kind,
        label,
        label_source,
        screen_position: screen_position(doc, obj),
        has_accessibility_markup: obj.has(ComponentKind::AccessibilityNode),
        navigation_mode: navigation_mode(nav),
        links: nav.map(|n| nav_links(n, owners)).unwrap_or_default(),
        hierarchy_index: index,
        interactable: selectable.map_or(true, |s| s.i64_field("m_Interactable").map_or(true, |v| v != 0)),
        icon: icon_of(doc, obj),
    })
}

/// Label policy: accessibility label, then nearest text, then the object
/// name, then the empty string.
fn resolve_label(
    doc: &SceneDocument,
    obj: &GameObjectNode,
    selectable: Option<&ComponentNode>,
) -> (String, LabelSource) {
    if let Some(label) = accessibility_label(obj) {
        return (label, LabelSource::Accessibility);
    }
    if let Some(text) = nearest_text(doc, obj, selectable) {
        return (text, LabelSource::Text);
    }
    if !obj.name.trim().is_empty() {
        return (obj.name.clone(), LabelSource::Name);
    }
    (String::new(), LabelSource::None)
}

fn accessibility_label(obj: &GameObjectNode) -> Option<String> {
    let node = obj.component(ComponentKind::AccessibilityNode)?;
    ACCESSIBILITY_LABEL_KEYS
        .iter()
        .find_map(|k| node.str_field(k))
        .map(|s| strip_rich_text(&s))
        .filter(|s| !s.trim().is_empty())
}

/// The object's own text, else the first text below it in depth-first
/// sibling order. Subtrees of nested interactive elements belong to those
/// elements and are not searched.
fn nearest_text(doc: &SceneDocument, obj: &GameObjectNode, selectable: Option<&ComponentNode>) -> Option<String> {
    if let Some(text) = obj.text().filter(|t| !t.trim().is_empty()) {
        return Some(text);
    }
    // An input field's value and placeholder texts are not labels.
    let excluded: Vec<FileId> = selectable
        .map(|s| NOT_LABEL_REFS.iter().filter_map(|k| s.ref_field(k)).collect())
        .unwrap_or_default();

    let mut seen: HashSet<FileId> = HashSet::from([obj.id]);
    let mut stack: Vec<&GameObjectNode> = doc.children(obj).into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if !seen.insert(node.id) || interactive_kind(node).is_some() {
            continue;
        }
        let is_excluded = excluded.contains(&node.id)
            || node.text_component().is_some_and(|c| excluded.contains(&c.id()));
        if !is_excluded {
            if let Some(text) = node.text().filter(|t| !t.trim().is_empty()) {
                return Some(text);
            }
        }
        stack.extend(doc.children(node).into_iter().rev());
    }
    None
}

fn navigation_mode(nav: Option<&Value>) -> NavigationMode {
    match nav.and_then(|n| n.get("m_Mode")).and_then(Value::as_i64) {
        Some(0) => NavigationMode::None,
        Some(4) => NavigationMode::Explicit,
        _ => NavigationMode::Auto,
    }
}

fn nav_links(nav: &Value, owners: &HashMap<FileId, FileId>) -> NavLinks {
    let target = |key: &str| -> Option<FileId> {
        let id = nav.get(key).and_then(file_ref)?;
        Some(owners.get(&id).copied().unwrap_or(id))
    };
    NavLinks {
        up: target("m_SelectOnUp"),
        down: target("m_SelectOnDown"),
        left: target("m_SelectOnLeft"),
        right: target("m_SelectOnRight"),
    }
}

/// Maps every component id to the game object that owns it.
fn component_owners(doc: &SceneDocument) -> HashMap<FileId, FileId> {
    doc.objects()
        .iter()
        .flat_map(|o| o.components.iter().map(move |c| (c.id(), o.id)))
        .collect()
}

/// Sum of anchored positions up the hierarchy, scaled by the nearest
/// canvas scaler.
fn screen_position(doc: &SceneDocument, obj: &GameObjectNode) -> ScreenPosition {
    let chain: Vec<&GameObjectNode> = std::iter::once(obj).chain(doc.ancestors(obj)).collect();
    let (x, y) = chain
        .iter()
        .filter_map(|o| o.transform)
        .fold((0.0, 0.0), |(x, y), t| (x + t.anchored_position.x, y + t.anchored_position.y));
    let scale = chain
        .iter()
        .find_map(|o| o.component(ComponentKind::CanvasScaler))
        .and_then(|c| c.f64_field("m_ScaleFactor"))
        .filter(|s| *s > 0.0)
        .unwrap_or(1.0);
    ScreenPosition { x: x * scale, y: y * scale }
}

/// Sprite of the object's own image, else of the first image below it.
fn icon_of(doc: &SceneDocument, obj: &GameObjectNode) -> Option<String> {
    std::iter::once(obj)
        .chain(doc.descendants(obj))
        .filter_map(|o| o.component(ComponentKind::Image))
        .find_map(sprite_ref)
}

fn sprite_ref(image: &ComponentNode) -> Option<String> {
    let sprite = image.field("m_Sprite")?;
    let id = file_ref(sprite)?;
    let guid = sprite.get("guid").and_then(scalar_string).unwrap_or_default();
    Some(format!("{id}:{guid}"))
}
