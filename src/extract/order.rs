// src/extract/order.rs
//! Visual reading order and declared focus order.

use std::collections::{HashMap, HashSet};

use super::{InteractiveElement, NavigationMode};
use crate::scene::{FileId, SceneDocument};

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;

/// Vertical distance, in scaled canvas units, within which elements share a row.
pub const ROW_BAND: f64 = 50.0;

/// Top-to-bottom, left-to-right order using [`ROW_BAND`].
#[must_use]
pub fn extract_visual_order(elements: &[InteractiveElement]) -> Vec<InteractiveElement> {
    extract_visual_order_with_band(elements, ROW_BAND)
}

/// Groups elements into rows and reads each row left to right.
///
/// Elements are walked from the top down. A row is anchored on its first
/// (topmost) element; every following element within `band` of that anchor
/// joins the row. Inside a row, x ascending decides, then declaration order.
#[must_use]
pub fn extract_visual_order_with_band(elements: &[InteractiveElement], band: f64) -> Vec<InteractiveElement> {
    let mut sorted: Vec<&InteractiveElement> = elements.iter().collect();
    sorted.sort_by(|a, b| {
        b.screen_position
            .y
            .total_cmp(&a.screen_position.y)
            .then(a.screen_position.x.total_cmp(&b.screen_position.x))
            .then(a.hierarchy_index.cmp(&b.hierarchy_index))
    });

    let mut rows: Vec<Vec<&InteractiveElement>> = Vec::new();
    let mut anchor = f64::NAN;
    for element in sorted {
        let y = element.screen_position.y;
        match rows.last_mut() {
            Some(row) if anchor - y <= band => row.push(element),
            _ => {
                anchor = y;
                rows.push(vec![element]);
            }
        }
    }

    rows.into_iter()
        .flat_map(|mut row| {
            row.sort_by(|a, b| {
                a.screen_position
                    .x
                    .total_cmp(&b.screen_position.x)
                    .then(a.hierarchy_index.cmp(&b.hierarchy_index))
            });
            row
        })
        .cloned()
        .collect()
}

/// The order keyboard focus actually travels.
///
/// Without explicit navigation this is declaration order. With it, the chain
/// starts at the explicit element nothing else points down or right to,
/// follows `down` (falling back to `right`) links, and any element the chain
/// never reaches is appended in declaration order.
#[must_use]
pub fn extract_declared_focus_order(elements: &[InteractiveElement], doc: &SceneDocument) -> Vec<InteractiveElement> {
    let mut declared: Vec<&InteractiveElement> = elements.iter().collect();
    declared.sort_by_key(|e| doc.declaration_index(e.game_object_id).unwrap_or(e.hierarchy_index));

    let is_explicit = |e: &&InteractiveElement| e.navigation_mode == NavigationMode::Explicit;
    if !declared.iter().any(is_explicit) {
        return declared.into_iter().cloned().collect();
    }

    let by_id: HashMap<FileId, &InteractiveElement> = declared.iter().map(|e| (e.game_object_id, *e)).collect();
    let pointed_at: HashSet<FileId> = declared
        .iter()
        .filter(|e| is_explicit(e))
        .flat_map(|e| [e.links.down, e.links.right])
        .flatten()
        .collect();

    let start = declared
        .iter()
        .filter(|e| is_explicit(e))
        .find(|e| !pointed_at.contains(&e.game_object_id))
        .or_else(|| declared.iter().find(|e| is_explicit(e)))
        .copied();

    let mut visited: HashSet<FileId> = HashSet::new();
    let mut order: Vec<InteractiveElement> = Vec::with_capacity(declared.len());
    let mut current = start;
    while let Some(element) = current {
        if !visited.insert(element.game_object_id) {
            break;
        }
        order.push(element.clone());
        current = if is_explicit(&element) {
            [element.links.down, element.links.right]
                .into_iter()
                .flatten()
                .filter(|id| !visited.contains(id))
                .find_map(|id| by_id.get(&id).copied())
        } else {
            None
        };
    }

    order.extend(
        declared
            .into_iter()
            .filter(|e| !visited.contains(&e.game_object_id))
            .cloned(),
    );
    order
}
