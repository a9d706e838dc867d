// tests/common/mod.rs - Unity scene YAML builder for tests
#![allow(dead_code)]

use std::fmt::Write;

use sceneaudit_core::analysis::SceneCorpus;
use sceneaudit_core::scene::{parse_scene, SceneDocument};

/// Ids of a game object and its RectTransform.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub go: i64,
    pub rect: i64,
}

struct PendingObject {
    node: Node,
    name: String,
    parent: Option<i64>,
    position: (f64, f64),
    size: (f64, f64),
    children: Vec<i64>,
    components: Vec<(i64, String)>,
}

/// Builds scene text the way the Unity editor serializes it.
pub struct SceneBuilder {
    next_id: i64,
    objects: Vec<PendingObject>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            next_id: 1000,
            objects: Vec::new(),
        }
    }

    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// A game object with a fixed-size RectTransform at `position`.
    pub fn node(&mut self, name: &str, parent: Option<Node>, position: (f64, f64)) -> Node {
        let node = Node {
            go: self.id(),
            rect: self.id(),
        };
        if let Some(p) = parent {
            if let Some(pending) = self.objects.iter_mut().find(|o| o.node.go == p.go) {
                pending.children.push(node.rect);
            }
        }
        self.objects.push(PendingObject {
            node,
            name: name.to_string(),
            parent: parent.map(|p| p.rect),
            position,
            size: (160.0, 30.0),
            children: Vec::new(),
            components: Vec::new(),
        });
        node
    }

    /// Makes the node's rect stretch with its parent.
    pub fn stretch(&mut self, node: Node) {
        if let Some(pending) = self.objects.iter_mut().find(|o| o.node.go == node.go) {
            pending.size = (0.0, 0.0);
        }
    }

    /// Adds a MonoBehaviour with the given body lines; returns its id.
    pub fn component(&mut self, node: Node, body: &str) -> i64 {
        let id = self.id();
        let mut block = format!("--- !u!114 &{id}\nMonoBehaviour:\n  m_GameObject: {{fileID: {}}}\n  m_Enabled: 1\n", node.go);
        for line in body.lines() {
            let _ = writeln!(block, "  {line}");
        }
        if let Some(pending) = self.objects.iter_mut().find(|o| o.node.go == node.go) {
            pending.components.push((id, block));
        }
        id
    }

    pub fn button(&mut self, node: Node) -> i64 {
        self.selectable(node, "m_OnClick:\n  m_PersistentCalls:\n    m_Calls: []", 3, None)
    }

    /// A button with navigation `mode` and an optional down link to a
    /// selectable component id.
    pub fn button_nav(&mut self, node: Node, mode: i64, down: Option<i64>) -> i64 {
        self.selectable(node, "m_OnClick:\n  m_PersistentCalls:\n    m_Calls: []", mode, down)
    }

    pub fn toggle(&mut self, node: Node) -> i64 {
        self.selectable(node, "m_IsOn: 1", 3, None)
    }

    pub fn input_field(&mut self, node: Node, value_text: Option<i64>, placeholder: Option<i64>) -> i64 {
        let body = format!(
            "m_CharacterLimit: 0\nm_TextComponent: {{fileID: {}}}\nm_Placeholder: {{fileID: {}}}",
            value_text.unwrap_or(0),
            placeholder.unwrap_or(0)
        );
        self.selectable(node, &body, 3, None)
    }

    /// A button with extra transition lines such as `m_Transition: 1` and
    /// its `m_Colors` block.
    pub fn button_transition(&mut self, node: Node, transition: &str) -> i64 {
        let extra = format!("{transition}\nm_OnClick:\n  m_PersistentCalls:\n    m_Calls: []");
        self.selectable(node, &extra, 3, None)
    }

    /// A button with `m_Interactable: 0`.
    pub fn button_disabled(&mut self, node: Node, transition: &str) -> i64 {
        let body = format!("m_Navigation:\n  m_Mode: 3\nm_Interactable: 0\n{transition}\nm_OnClick: {{}}");
        self.component(node, &body)
    }

    fn selectable(&mut self, node: Node, extra: &str, mode: i64, down: Option<i64>) -> i64 {
        let body = format!(
            "m_Navigation:\n  m_Mode: {mode}\n  m_SelectOnUp: {{fileID: 0}}\n  m_SelectOnDown: {{fileID: {}}}\n  m_SelectOnLeft: {{fileID: 0}}\n  m_SelectOnRight: {{fileID: 0}}\nm_Interactable: 1\n{extra}",
            down.unwrap_or(0)
        );
        self.component(node, &body)
    }

    pub fn text(&mut self, node: Node, text: &str) -> i64 {
        self.text_styled(node, text, (0.0, 0.0, 0.0), 14)
    }

    pub fn text_styled(&mut self, node: Node, text: &str, color: (f64, f64, f64), size: u32) -> i64 {
        let (r, g, b) = color;
        let body = format!(
            "m_Color: {{r: {r}, g: {g}, b: {b}, a: 1}}\nm_FontData:\n  m_FontSize: {size}\n  m_FontStyle: 0\n  m_BestFit: 0\nm_Text: {}",
            quote(text)
        );
        self.component(node, &body)
    }

    pub fn tmp_text(&mut self, node: Node, text: &str) -> i64 {
        let body = format!(
            "m_text: {}\nm_fontColor: {{r: 0, g: 0, b: 0, a: 1}}\nm_fontSize: 24\nm_enableAutoSizing: 0",
            quote(text)
        );
        self.component(node, &body)
    }

    pub fn accessibility(&mut self, node: Node, label: &str) -> i64 {
        self.component(node, &format!("m_AccessibilityLabel: {}\nm_AccessibilityRole: 1", quote(label)))
    }

    pub fn image(&mut self, node: Node, color: (f64, f64, f64), sprite_guid: Option<&str>) -> i64 {
        let (r, g, b) = color;
        let sprite = sprite_guid.map_or_else(
            || "{fileID: 0}".to_string(),
            |guid| format!("{{fileID: 21300000, guid: {guid}, type: 3}}"),
        );
        self.component(node, &format!("m_Color: {{r: {r}, g: {g}, b: {b}, a: 1}}\nm_Sprite: {sprite}\nm_Type: 0"))
    }

    pub fn size_fitter(&mut self, node: Node) -> i64 {
        self.component(node, "m_HorizontalFit: 0\nm_VerticalFit: 2")
    }

    pub fn canvas_scaler(&mut self, node: Node, factor: f64) -> i64 {
        self.component(node, &format!("m_UiScaleMode: 0\nm_ScaleFactor: {factor}"))
    }

    pub fn build(&self) -> String {
        let mut out = String::from("%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n");
        for pending in &self.objects {
            let _ = write!(
                out,
                "--- !u!1 &{}\nGameObject:\n  m_ObjectHideFlags: 0\n  serializedVersion: 6\n  m_Component:\n  - component: {{fileID: {}}}\n",
                pending.node.go, pending.node.rect
            );
            for (id, _) in &pending.components {
                let _ = writeln!(out, "  - component: {{fileID: {id}}}");
            }
            let _ = writeln!(out, "  m_Layer: 5\n  m_Name: {}\n  m_IsActive: 1", quote(&pending.name));

            let (x, y) = pending.position;
            let (w, h) = pending.size;
            let _ = write!(
                out,
                "--- !u!224 &{}\nRectTransform:\n  m_GameObject: {{fileID: {}}}\n",
                pending.node.rect, pending.node.go
            );
            if pending.children.is_empty() {
                out.push_str("  m_Children: []\n");
            } else {
                out.push_str("  m_Children:\n");
                for c in &pending.children {
                    let _ = writeln!(out, "  - {{fileID: {c}}}");
                }
            }
            let (anchor_min, anchor_max) = if w > 0.0 { ((0.5, 0.5), (0.5, 0.5)) } else { ((0.0, 0.0), (1.0, 1.0)) };
            let _ = write!(
                out,
                "  m_Father: {{fileID: {}}}\n  m_AnchorMin: {{x: {}, y: {}}}\n  m_AnchorMax: {{x: {}, y: {}}}\n  m_AnchoredPosition: {{x: {x}, y: {y}}}\n  m_SizeDelta: {{x: {w}, y: {h}}}\n  m_Pivot: {{x: 0.5, y: 0.5}}\n",
                pending.parent.unwrap_or(0),
                anchor_min.0,
                anchor_min.1,
                anchor_max.0,
                anchor_max.1
            );
            for (_, block) in &pending.components {
                out.push_str(block);
            }
        }
        out
    }

    pub fn parse(&self, path: &str) -> SceneDocument {
        parse_scene(path, &self.build()).unwrap()
    }
}

/// Single-quoted YAML scalar.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

pub fn corpus(docs: Vec<SceneDocument>) -> SceneCorpus {
    SceneCorpus::new(docs)
}

/// A scene with a `MainNav` container holding buttons in `order`, plus a
/// marked-up title so only navigation differs between scenes.
pub fn nav_scene(path: &str, order: &[&str]) -> SceneDocument {
    parse_scene(path, &nav_scene_text(order)).unwrap()
}

/// Scene text for [`nav_scene`].
pub fn nav_scene_text(order: &[&str]) -> String {
    let mut b = SceneBuilder::new();
    let title = b.node("Title", None, (0.0, 300.0));
    b.text(title, "Main Menu");
    b.accessibility(title, "Main Menu");
    let nav = b.node("MainNav", None, (0.0, 0.0));
    b.stretch(nav);
    for (i, name) in order.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = -(i as f64) * 100.0;
        let n = b.node(name, Some(nav), (0.0, y));
        b.button(n);
        let label = b.node(&format!("{name}Label"), Some(n), (0.0, 0.0));
        b.stretch(label);
        b.text(label, name);
    }
    b.build()
}
