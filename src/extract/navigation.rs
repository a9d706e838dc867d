// src/extract/navigation.rs

use serde::Serialize;

use super::elements::interactive_kind;
use crate::scene::SceneDocument;

/// A recurring navigation group and the interactive elements inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationContainer {
    pub container_name: String,
    /// Names of interactive descendants, depth-first in sibling order.
    pub child_element_names: Vec<String>,
}

/// Finds objects whose name satisfies `matcher` and lists the interactive
/// elements below them. Containers come back in declaration order.
#[must_use]
pub fn extract_navigation_containers(
    doc: &SceneDocument,
    matcher: &dyn Fn(&str) -> bool,
) -> Vec<NavigationContainer> {
    doc.objects()
        .iter()
        .filter(|o| !o.name.is_empty() && matcher(&o.name))
        .map(|o| NavigationContainer {
            container_name: o.name.clone(),
            child_element_names: doc
                .descendants(o)
                .into_iter()
                .filter(|d| interactive_kind(d).is_some())
                .map(|d| d.name.clone())
                .collect(),
        })
        .collect()
}
