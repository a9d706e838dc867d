// src/analysis/contrast.rs
//! Static contrast estimate between a text colour and the nearest image
//! behind it. Sprites, gradients and whatever sits under a translucent
//! image are unknown, so every finding is an estimate.

use serde_yaml::Value;

use super::{AnalysisContext, Analyzer, SceneCorpus};
use crate::config::RuleConfig;
use crate::scene::{ComponentKind, ComponentNode, GameObjectNode, Rgba, SceneDocument};
use crate::types::{criteria, Criterion, Finding, Severity};

#[cfg(test)]
#[path = "contrast_test.rs"]
mod tests;

/// Below this ratio even large text fails; reported as high.
const SEVERE_RATIO: f64 = 3.0;

/// Unity UI `FontStyle`: 1 bold, 3 bold-and-italic.
const UI_BOLD_STYLES: &[i64] = &[1, 3];

/// TextMeshPro `FontStyles` bold bit.
const TMP_BOLD_BIT: i64 = 1;

const UI_DEFAULT_FONT_SIZE: f64 = 14.0;
const TMP_DEFAULT_FONT_SIZE: f64 = 36.0;

/// 1.4.3: text stands out from its background.
pub struct TextContrast;

impl Analyzer for TextContrast {
    fn criterion(&self) -> Criterion {
        criteria::CONTRAST
    }

    fn name(&self) -> &'static str {
        "Text Contrast"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        corpus.iter().flat_map(|doc| check_scene(doc, ctx.rules)).collect()
    }
}

fn check_scene(doc: &SceneDocument, rules: &RuleConfig) -> Vec<Finding> {
    doc.objects()
        .iter()
        .filter_map(|obj| check_text(doc, obj, rules))
        .collect()
}

fn check_text(doc: &SceneDocument, obj: &GameObjectNode, rules: &RuleConfig) -> Option<Finding> {
    let text = obj.text_component()?;
    if obj.text().map_or(true, |t| t.trim().is_empty()) {
        return None;
    }
    let foreground = text_color(text)?;
    let (background, behind) = doc
        .ancestors(obj)
        .into_iter()
        .find_map(|a| a.component(ComponentKind::Image)?.color_field("m_Color").map(|c| (c, a)))?;

    let ratio = contrast_ratio(composite(foreground, background), background);
    let (size, bold) = font_metrics(text);
    let large = size >= rules.large_font_size || (bold && size >= rules.large_bold_font_size);
    let threshold = if large { rules.contrast_large } else { rules.contrast_normal };
    if ratio >= threshold {
        return None;
    }

    let severity = if ratio < SEVERE_RATIO { Severity::High } else { Severity::Medium };
    let subject = if obj.name.is_empty() { format!("#{}", obj.id) } else { obj.name.clone() };
    Some(Finding::new(
        &criteria::CONTRAST,
        severity,
        doc.path(),
        subject,
        format!(
            "Text contrast {ratio:.2}:1 against '{}' is below {threshold}:1{} (static estimate)",
            behind.name,
            if large { " for large text" } else { "" }
        ),
        "Darken or lighten the text or its background until the ratio meets the minimum, then verify on screen",
    ))
}

fn text_color(text: &ComponentNode) -> Option<Rgba> {
    match text.kind() {
        ComponentKind::TextMeshPro => text.color_field("m_fontColor"),
        _ => text.color_field("m_Color"),
    }
}

/// Font size and whether the style is bold.
fn font_metrics(text: &ComponentNode) -> (f64, bool) {
    match text.kind() {
        ComponentKind::TextMeshPro => (
            text.f64_field("m_fontSize").unwrap_or(TMP_DEFAULT_FONT_SIZE),
            text.i64_field("m_fontStyle").is_some_and(|s| s & TMP_BOLD_BIT != 0),
        ),
        _ => {
            let data = text.field("m_FontData");
            let nested = |key: &str| data.and_then(|d| d.get(key));
            (
                nested("m_FontSize").and_then(Value::as_f64).unwrap_or(UI_DEFAULT_FONT_SIZE),
                nested("m_FontStyle")
                    .and_then(Value::as_i64)
                    .is_some_and(|s| UI_BOLD_STYLES.contains(&s)),
            )
        }
    }
}

/// Blends a translucent foreground over an opaque background.
#[must_use]
pub fn composite(fg: Rgba, bg: Rgba) -> Rgba {
    let a = fg.a.clamp(0.0, 1.0);
    Rgba {
        r: fg.r * a + bg.r * (1.0 - a),
        g: fg.g * a + bg.g * (1.0 - a),
        b: fg.b * a + bg.b * (1.0 - a),
        a: 1.0,
    }
}

fn linearize(channel: f64) -> f64 {
    let c = channel.clamp(0.0, 1.0);
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of an sRGB colour with `0..=1` channels.
#[must_use]
pub fn relative_luminance(color: Rgba) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio, from 1.0 to 21.0, independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
