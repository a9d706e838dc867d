// src/extract/mod.rs
//! Semantic views over a [`SceneDocument`](crate::scene::SceneDocument).
//!
//! Every extractor is a pure function: same document in, same output out.
//! Missing data never fails an extractor; it degrades to the safest default
//! (empty label, `Auto` navigation) and leaves the judgement to the analyzers.

pub mod elements;
pub mod labels;
pub mod navigation;
pub mod order;

pub use elements::extract_interactive_elements;
pub use labels::extract_label_map;
pub use navigation::{extract_navigation_containers, NavigationContainer};
pub use order::{extract_declared_focus_order, extract_visual_order, extract_visual_order_with_band, ROW_BAND};

use crate::scene::FileId;
use serde::Serialize;

/// What kind of control an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ElementKind {
    Button,
    Toggle,
    Slider,
    Link,
    InputField,
    Dropdown,
}

impl ElementKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Toggle => "Toggle",
            Self::Slider => "Slider",
            Self::Link => "Link",
            Self::InputField => "InputField",
            Self::Dropdown => "Dropdown",
        }
    }
}

/// Where an element's label came from, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelSource {
    Accessibility,
    Text,
    Name,
    None,
}

impl LabelSource {
    /// Accessibility markup or visible text. An object name is not a label.
    #[must_use]
    pub fn is_associated(self) -> bool {
        matches!(self, Self::Accessibility | Self::Text)
    }
}

/// Keyboard/gamepad navigation mode of a selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationMode {
    Auto,
    Explicit,
    None,
}

/// Explicit navigation targets, as game object ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavLinks {
    pub up: Option<FileId>,
    pub down: Option<FileId>,
    pub left: Option<FileId>,
    pub right: Option<FileId>,
}

/// Screen-space position; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// An interactive control derived from a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveElement {
    pub game_object_id: FileId,
    pub name: String,
    pub kind: ElementKind,
    pub label: String,
    pub label_source: LabelSource,
    pub screen_position: ScreenPosition,
    pub has_accessibility_markup: bool,
    pub navigation_mode: NavigationMode,
    pub links: NavLinks,
    /// Declaration index of the owning game object.
    pub hierarchy_index: usize,
    pub interactable: bool,
    /// Sprite reference of the element's graphic, as `fileID:guid`.
    pub icon: Option<String>,
}
