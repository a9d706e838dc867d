// src/scene/mod.rs
//! In-memory model of a Unity scene file.
//!
//! The model is purely structural: game objects, their components and the
//! transform hierarchy. Deciding what a button or a title is belongs to
//! [`crate::extract`].

pub mod component;
pub mod parser;

pub use component::{ComponentKind, ComponentNode, Rgba, Vec2};
pub use parser::parse_scene;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Document-scoped object identifier (Unity's local file id).
pub type FileId = i64;

static RICH_TEXT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Guard against malformed hierarchies that loop back on themselves.
const MAX_HIERARCHY_DEPTH: usize = 256;

/// Geometry of a `RectTransform`, in the parent's local units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectTransformData {
    pub anchored_position: Vec2,
    pub size_delta: Vec2,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
}

impl RectTransformData {
    /// A rect whose anchors coincide has a size fixed by `size_delta`
    /// on that axis; stretched anchors follow the parent instead.
    #[must_use]
    pub fn is_fixed_size(&self) -> bool {
        let fixed_w = (self.anchor_max.x - self.anchor_min.x).abs() < f64::EPSILON;
        let fixed_h = (self.anchor_max.y - self.anchor_min.y).abs() < f64::EPSILON;
        fixed_w && fixed_h && self.size_delta.x > 0.0 && self.size_delta.y > 0.0
    }
}

/// One `GameObject` block and everything attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObjectNode {
    pub id: FileId,
    pub name: String,
    pub active: bool,
    pub components: Vec<ComponentNode>,
    pub transform: Option<RectTransformData>,
    pub parent: Option<FileId>,
    pub children: Vec<FileId>,
}

impl GameObjectNode {
    /// First component of the given kind.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentNode> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    #[must_use]
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.component(kind).is_some()
    }

    /// The text component, Unity UI or TextMeshPro.
    #[must_use]
    pub fn text_component(&self) -> Option<&ComponentNode> {
        self.components.iter().find(|c| c.kind().is_text())
    }

    /// Displayed text of the attached text component, rich-text tags removed.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.raw_text().map(|raw| strip_rich_text(&raw))
    }

    /// Serialized text, markup included.
    #[must_use]
    pub fn raw_text(&self) -> Option<String> {
        let c = self.text_component()?;
        match c.kind() {
            ComponentKind::TextMeshPro => c.str_field("m_text"),
            _ => c.str_field("m_Text"),
        }
    }
}

/// Removes rich-text tags such as `<b>` or `<link="id">`, keeping what is shown.
#[must_use]
pub fn strip_rich_text(raw: &str) -> String {
    RICH_TEXT_TAG_RE.replace_all(raw, "").into_owned()
}

/// A parsed scene. Immutable once built by [`parse_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument {
    path: String,
    objects: Vec<GameObjectNode>,
    index: HashMap<FileId, usize>,
}

impl SceneDocument {
    pub(crate) fn new(path: String, objects: Vec<GameObjectNode>) -> Self {
        let index = objects.iter().enumerate().map(|(i, o)| (o.id, i)).collect();
        Self { path, objects, index }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// File stem, for display.
    #[must_use]
    pub fn name(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.path)
    }

    /// Game objects in declaration order.
    #[must_use]
    pub fn objects(&self) -> &[GameObjectNode] {
        &self.objects
    }

    #[must_use]
    pub fn object(&self, id: FileId) -> Option<&GameObjectNode> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    /// Position of the object in declaration order.
    #[must_use]
    pub fn declaration_index(&self, id: FileId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[must_use]
    pub fn parent(&self, obj: &GameObjectNode) -> Option<&GameObjectNode> {
        obj.parent.and_then(|p| self.object(p))
    }

    /// Direct children in serialized sibling order.
    #[must_use]
    pub fn children(&self, obj: &GameObjectNode) -> Vec<&GameObjectNode> {
        obj.children.iter().filter_map(|c| self.object(*c)).collect()
    }

    /// Ancestors from the direct parent up to the root.
    #[must_use]
    pub fn ancestors(&self, obj: &GameObjectNode) -> Vec<&GameObjectNode> {
        let mut out = Vec::new();
        let mut current = self.parent(obj);
        while let Some(node) = current {
            if out.len() >= MAX_HIERARCHY_DEPTH || node.id == obj.id {
                break;
            }
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Descendants in depth-first, sibling order (excluding `obj`).
    #[must_use]
    pub fn descendants(&self, obj: &GameObjectNode) -> Vec<&GameObjectNode> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([obj.id]);
        self.collect_descendants(&obj.children, 0, &mut seen, &mut out);
        out
    }

    fn collect_descendants<'a>(
        &'a self,
        children: &[FileId],
        depth: usize,
        seen: &mut HashSet<FileId>,
        out: &mut Vec<&'a GameObjectNode>,
    ) {
        if depth >= MAX_HIERARCHY_DEPTH {
            return;
        }
        for &id in children {
            let Some(child) = self.object(id) else { continue };
            if !seen.insert(child.id) {
                continue;
            }
            out.push(child);
            self.collect_descendants(&child.children, depth + 1, seen, out);
        }
    }
}
