// src/extract/labels.rs

use std::collections::BTreeMap;

use crate::scene::SceneDocument;

/// Maps object names to the text they display.
///
/// Only objects with a non-empty name and a text component appear. When two
/// objects share a name, the first declared wins.
#[must_use]
pub fn extract_label_map(doc: &SceneDocument) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for obj in doc.objects() {
        if obj.name.is_empty() {
            continue;
        }
        let Some(text) = obj.text() else { continue };
        map.entry(obj.name.clone()).or_insert(text);
    }
    map
}
