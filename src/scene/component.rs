// src/scene/component.rs
//! Component nodes and typed access to their serialized fields.

use serde_yaml::Value;

use super::FileId;

/// Script guid of the built-in `UnityEngine.UI` assembly.
const UNITY_UI_GUID: &str = "f70555f144d8491a825f0804e09c671c";

/// `m_Script` fileIDs of built-in UI components inside [`UNITY_UI_GUID`].
const UNITY_UI_SCRIPTS: &[(i64, ComponentKind)] = &[
    (708_705_254, ComponentKind::Text),
    (-765_806_418, ComponentKind::Image),
    (1_392_445_389, ComponentKind::Button),
    (2_109_663_825, ComponentKind::Toggle),
    (-113_659_843, ComponentKind::Slider),
    (-2_061_169_968, ComponentKind::Scrollbar),
    (575_553_740, ComponentKind::InputField),
    (853_051_423, ComponentKind::Dropdown),
    (1_741_964_061, ComponentKind::ContentSizeFitter),
    (1_297_475_563, ComponentKind::LayoutGroup),
    (-405_508_275, ComponentKind::LayoutGroup),
    (-2_095_666_955, ComponentKind::LayoutGroup),
    (1_679_637_790, ComponentKind::LayoutElement),
    (1_980_459_831, ComponentKind::CanvasScaler),
];

/// TextMeshPro script guids (the script fileID is always 11500000).
const TMP_SCRIPTS: &[(&str, ComponentKind)] = &[
    ("f4688fdb7df04437aeb418b961361dc5", ComponentKind::TextMeshPro),
    ("2da0c512f12947e489f739169773d7ca", ComponentKind::InputField),
    ("7b743370ac3e4ec2a1668f5455a8ef8a", ComponentKind::Dropdown),
];

/// Field signatures used when the script reference is unknown.
/// Checked in order; the first entry whose keys are all present wins.
const FIELD_SIGNATURES: &[(&[&str], ComponentKind)] = &[
    (&["m_AccessibilityLabel"], ComponentKind::AccessibilityNode),
    (&["m_AccessibilityRole"], ComponentKind::AccessibilityNode),
    (&["accessibilityLabel"], ComponentKind::AccessibilityNode),
    (&["m_OnClick"], ComponentKind::Button),
    (&["m_IsOn"], ComponentKind::Toggle),
    (&["m_CaptionText"], ComponentKind::Dropdown),
    (&["m_CharacterLimit"], ComponentKind::InputField),
    (&["m_MinValue", "m_MaxValue"], ComponentKind::Slider),
    (&["m_NumberOfSteps", "m_Size"], ComponentKind::Scrollbar),
    (&["m_FontData"], ComponentKind::Text),
    (&["m_text"], ComponentKind::TextMeshPro),
    (&["m_HorizontalFit"], ComponentKind::ContentSizeFitter),
    (&["m_ChildAlignment"], ComponentKind::LayoutGroup),
    (&["m_IgnoreLayout"], ComponentKind::LayoutElement),
    (&["m_UiScaleMode"], ComponentKind::CanvasScaler),
    (&["m_Sprite", "m_Type"], ComponentKind::Image),
];

/// Structural type of a component. `Opaque` covers everything the
/// parser does not recognise, kept as pass-through data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Transform,
    RectTransform,
    Canvas,
    CanvasScaler,
    Button,
    Toggle,
    Slider,
    Scrollbar,
    InputField,
    Dropdown,
    Text,
    TextMeshPro,
    Image,
    AccessibilityNode,
    ContentSizeFitter,
    LayoutGroup,
    LayoutElement,
    Opaque,
}

impl ComponentKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::RectTransform => "RectTransform",
            Self::Canvas => "Canvas",
            Self::CanvasScaler => "CanvasScaler",
            Self::Button => "Button",
            Self::Toggle => "Toggle",
            Self::Slider => "Slider",
            Self::Scrollbar => "Scrollbar",
            Self::InputField => "InputField",
            Self::Dropdown => "Dropdown",
            Self::Text => "Text",
            Self::TextMeshPro => "TextMeshPro",
            Self::Image => "Image",
            Self::AccessibilityNode => "AccessibilityNode",
            Self::ContentSizeFitter => "ContentSizeFitter",
            Self::LayoutGroup => "LayoutGroup",
            Self::LayoutElement => "LayoutElement",
            Self::Opaque => "Opaque",
        }
    }

    /// UI-relevant kinds appear at most once per game object.
    #[must_use]
    pub fn is_unique(self) -> bool {
        self != Self::Opaque
    }

    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::TextMeshPro)
    }

    /// Resolves the kind from the Unity class id and the block's fields.
    #[must_use]
    pub fn classify(class_id: u32, fields: &Value) -> Self {
        match class_id {
            4 => Self::Transform,
            224 => Self::RectTransform,
            223 => Self::Canvas,
            114 => classify_script(fields),
            _ => Self::Opaque,
        }
    }
}

fn classify_script(fields: &Value) -> ComponentKind {
    if let Some(kind) = classify_by_script_ref(fields) {
        return kind;
    }
    FIELD_SIGNATURES
        .iter()
        .find(|(keys, _)| keys.iter().all(|k| fields.get(*k).is_some()))
        .map_or(ComponentKind::Opaque, |(_, kind)| *kind)
}

fn classify_by_script_ref(fields: &Value) -> Option<ComponentKind> {
    let script = fields.get("m_Script")?;
    let file_id = script.get("fileID").and_then(Value::as_i64)?;
    let guid = script.get("guid").and_then(scalar_string)?;
    if guid == UNITY_UI_GUID {
        return UNITY_UI_SCRIPTS
            .iter()
            .find(|(id, _)| *id == file_id)
            .map(|(_, kind)| *kind);
    }
    TMP_SCRIPTS
        .iter()
        .find(|(g, _)| *g == guid)
        .map(|(_, kind)| *kind)
}

/// 2D vector from `{x: .., y: ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Linear RGBA colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A component block attached to a game object.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    id: FileId,
    class_id: u32,
    kind: ComponentKind,
    fields: Value,
}

impl ComponentNode {
    #[must_use]
    pub fn new(id: FileId, class_id: u32, fields: Value) -> Self {
        let kind = ComponentKind::classify(class_id, &fields);
        Self { id, class_id, kind, fields }
    }

    #[must_use]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[must_use]
    pub fn class_id(&self) -> u32 {
        self.class_id
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Raw serialized fields (pass-through for unknown components).
    #[must_use]
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<String> {
        self.field(key).and_then(scalar_string)
    }

    #[must_use]
    pub fn i64_field(&self, key: &str) -> Option<i64> {
        self.field(key).and_then(Value::as_i64)
    }

    #[must_use]
    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(Value::as_f64)
    }

    /// `true` when the field is a non-zero integer flag.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.i64_field(key).is_some_and(|v| v != 0)
    }

    /// Target of a `{fileID: N}` reference; `0` means "none".
    #[must_use]
    pub fn ref_field(&self, key: &str) -> Option<FileId> {
        self.field(key).and_then(file_ref)
    }

    #[must_use]
    pub fn vec2_field(&self, key: &str) -> Option<Vec2> {
        self.field(key).and_then(vec2)
    }

    #[must_use]
    pub fn color_field(&self, key: &str) -> Option<Rgba> {
        self.field(key).and_then(color)
    }
}

/// Renders a YAML scalar as a string. Numbers and booleans are rendered
/// too, since plain scalars such as guids may be read as numbers.
#[must_use]
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extracts a non-null `{fileID: N}` reference.
#[must_use]
pub fn file_ref(value: &Value) -> Option<FileId> {
    let id = value.get("fileID").and_then(Value::as_i64)?;
    (id != 0).then_some(id)
}

fn number(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

fn vec2(value: &Value) -> Option<Vec2> {
    Some(Vec2 {
        x: number(value, "x")?,
        y: number(value, "y")?,
    })
}

/// Reads an `{r, g, b, a}` mapping; alpha defaults to opaque.
#[must_use]
pub fn color(value: &Value) -> Option<Rgba> {
    Some(Rgba {
        r: number(value, "r")?,
        g: number(value, "g")?,
        b: number(value, "b")?,
        a: number(value, "a").unwrap_or(1.0),
    })
}
