// tests/unit_analyzers.rs - Criterion analyzer tests
mod common;

use common::{nav_scene, SceneBuilder};
use sceneaudit_core::analysis::contrast::TextContrast;
use sceneaudit_core::analysis::focus_order::FocusOrder;
use sceneaudit_core::analysis::focus_visible::FocusVisible;
use sceneaudit_core::analysis::identification::ConsistentIdentification;
use sceneaudit_core::analysis::keyboard::KeyboardReachability;
use sceneaudit_core::analysis::labels::HeadingsAndLabels;
use sceneaudit_core::analysis::navigation::ConsistentNavigation;
use sceneaudit_core::analysis::text_resize::TextResize;
use sceneaudit_core::analysis::titling::{SceneTitling, SCENE_TITLE_SUBJECT};
use sceneaudit_core::analysis::{all_analyzers, enabled_analyzers, AnalysisContext, Analyzer, SceneCorpus};
use sceneaudit_core::config::{RuleConfig, Vocabulary};
use sceneaudit_core::scene::SceneDocument;
use sceneaudit_core::types::{Finding, Severity};

fn run(analyzer: &dyn Analyzer, docs: Vec<SceneDocument>) -> Vec<Finding> {
    let vocab = Vocabulary::default();
    let rules = RuleConfig::default();
    analyzer.analyze(&SceneCorpus::new(docs), &AnalysisContext::new(&vocab, &rules))
}

fn labelled_button(b: &mut SceneBuilder, name: &str, text: &str, y: f64) {
    let n = b.node(name, None, (0.0, y));
    b.button(n);
    let label = b.node(&format!("{name}Label"), Some(n), (0.0, 0.0));
    b.stretch(label);
    b.text(label, text);
}

// --- Scene Titling ---

#[test]
fn test_titling_missing_title() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Play", "Play", 0.0);
    let findings = run(&SceneTitling, vec![b.parse("Scenes/Menu.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert_eq!(findings[0].subject(), SCENE_TITLE_SUBJECT);
    assert_eq!(findings[0].scene(), "Scenes/Menu.unity");
}

#[test]
fn test_titling_title_without_text() {
    let mut b = SceneBuilder::new();
    b.node("TitleBar", None, (0.0, 300.0));
    let findings = run(&SceneTitling, vec![b.parse("Menu.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].subject(), "TitleBar");
    assert!(findings[0].message().contains("no visible text"));
}

#[test]
fn test_titling_unmarked_title() {
    let mut b = SceneBuilder::new();
    let t = b.node("Title", None, (0.0, 300.0));
    b.text(t, "Main Menu");
    let findings = run(&SceneTitling, vec![b.parse("Menu.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert!(findings[0].message().contains("accessibility markup"));
}

#[test]
fn test_titling_marked_title_passes() {
    let mut b = SceneBuilder::new();
    let t = b.node("Title", None, (0.0, 300.0));
    b.text(t, "Main Menu");
    b.accessibility(t, "Main Menu");
    assert!(run(&SceneTitling, vec![b.parse("Menu.unity")]).is_empty());
}

#[test]
fn test_titling_reads_each_title_text() {
    let mut b = SceneBuilder::new();
    let first = b.node("Title", None, (0.0, 300.0));
    b.text(first, "");
    let second = b.node("Title", None, (0.0, 250.0));
    b.text(second, "Options");
    b.accessibility(second, "Options");
    assert!(run(&SceneTitling, vec![b.parse("Options.unity")]).is_empty());
}

// --- Headings & Labels ---

#[test]
fn test_vague_labels_flagged() {
    for label in ["ok", "OK", " ok ", "su"] {
        let mut b = SceneBuilder::new();
        labelled_button(&mut b, "Confirm", label, 0.0);
        let findings = run(&HeadingsAndLabels, vec![b.parse("Dialog.unity")]);
        assert_eq!(findings.len(), 1, "{label:?}");
        assert_eq!(findings[0].severity(), Severity::Medium);
    }
}

#[test]
fn test_vague_label_inside_markup_flagged() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Confirm", "<b>OK</b>", 0.0);
    let findings = run(&HeadingsAndLabels, vec![b.parse("Dialog.unity")]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message().contains("'OK'"), "{}", findings[0].message());
}

#[test]
fn test_vague_link_text_flagged() {
    let mut b = SceneBuilder::new();
    let terms = b.node("Terms", None, (0.0, 0.0));
    b.tmp_text(terms, "<link=\"terms\">click here</link>");
    let findings = run(&HeadingsAndLabels, vec![b.parse("Legal.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].subject(), "Terms");
    assert_eq!(findings[0].severity(), Severity::Medium);
}

#[test]
fn test_descriptive_label_passes() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Confirm", "Save Document", 0.0);
    assert!(run(&HeadingsAndLabels, vec![b.parse("Dialog.unity")]).is_empty());
}

#[test]
fn test_name_only_is_unlabeled() {
    let mut b = SceneBuilder::new();
    let n = b.node("SaveButton", None, (0.0, 0.0));
    b.button(n);
    let findings = run(&HeadingsAndLabels, vec![b.parse("Dialog.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::High);
    assert_eq!(findings[0].subject(), "SaveButton");
}

#[test]
fn test_empty_heading_flagged() {
    let mut b = SceneBuilder::new();
    let h = b.node("SectionHeading", None, (0.0, 0.0));
    b.text(h, "  ");
    let findings = run(&HeadingsAndLabels, vec![b.parse("Page.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].subject(), "SectionHeading");
}

// --- Focus Order ---

fn chain_scene(path: &str, explicit: bool) -> SceneDocument {
    let mut b = SceneBuilder::new();
    let a = b.node("A", None, (0.0, 300.0));
    let bb = b.node("B", None, (0.0, 200.0));
    let c = b.node("C", None, (0.0, 100.0));
    let mode = if explicit { 4 } else { 3 };
    let c_btn = b.button_nav(c, mode, None);
    let a_btn = b.button_nav(a, mode, explicit.then_some(c_btn));
    b.button_nav(bb, mode, explicit.then_some(a_btn));
    b.parse(path)
}

#[test]
fn test_focus_order_mismatch_single_high() {
    let findings = run(&FocusOrder, vec![chain_scene("Scenes/Chain.unity", true)]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::High);
    assert_eq!(findings[0].scene(), "Scenes/Chain.unity");
    assert_eq!(findings[0].subject(), "B");
}

#[test]
fn test_focus_order_matching_passes() {
    assert!(run(&FocusOrder, vec![chain_scene("Chain.unity", false)]).is_empty());
}

#[test]
fn test_focus_order_needs_two_elements() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Only", "Only", 0.0);
    assert!(run(&FocusOrder, vec![b.parse("One.unity")]).is_empty());
}

// --- Consistent Navigation ---

#[test]
fn test_navigation_reorder_single_medium() {
    let docs = vec![
        nav_scene("Scenes/A.unity", &["Home", "Settings", "Help"]),
        nav_scene("Scenes/B.unity", &["Home", "Help", "Settings"]),
    ];
    let findings = run(&ConsistentNavigation, docs);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert_eq!(findings[0].scene(), "Scenes/B.unity");
    assert_eq!(findings[0].subject(), "MainNav");
    assert!(findings[0].message().contains("reordered"));
    assert!(findings[0].message().contains("Scenes/A.unity"));
}

#[test]
fn test_navigation_missing_container() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Quit", "Quit", 0.0);
    let docs = vec![
        nav_scene("A.unity", &["Home", "Help"]),
        nav_scene("B.unity", &["Home", "Help"]),
        b.parse("C.unity"),
    ];
    let findings = run(&ConsistentNavigation, docs);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].scene(), "C.unity");
    assert!(findings[0].message().contains("missing"));
}

#[test]
fn test_navigation_single_scene_container_ignored() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Quit", "Quit", 0.0);
    let docs = vec![nav_scene("A.unity", &["Home", "Help"]), b.parse("B.unity")];
    assert!(run(&ConsistentNavigation, docs).is_empty());
}

// --- Consistent Identification ---

fn back_scene(path: &str, label: &str, sprite: &str) -> SceneDocument {
    let mut b = SceneBuilder::new();
    let n = b.node("BackButton", None, (0.0, 0.0));
    b.button(n);
    b.image(n, (1.0, 1.0, 1.0), Some(sprite));
    let l = b.node("Label", Some(n), (0.0, 0.0));
    b.stretch(l);
    b.text(l, label);
    b.parse(path)
}

#[test]
fn test_identification_label_mismatch() {
    let docs = vec![
        back_scene("A.unity", "Back", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        back_scene("B.unity", "Return", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
    ];
    let findings = run(&ConsistentIdentification, docs);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert_eq!(findings[0].scene(), "B.unity");
    assert_eq!(findings[0].subject(), "BackButton");
}

#[test]
fn test_identification_icon_mismatch_is_low() {
    let docs = vec![
        back_scene("A.unity", "Back", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        back_scene("B.unity", "Back", "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
    ];
    let findings = run(&ConsistentIdentification, docs);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Low);
    assert_eq!(findings[0].subject(), "BackButton (icon)");
}

#[test]
fn test_identification_ignores_markup_difference() {
    let docs = vec![
        back_scene("A.unity", "Back", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        back_scene("B.unity", "<b>Back</b>", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
    ];
    assert!(run(&ConsistentIdentification, docs).is_empty());
}

#[test]
fn test_identification_same_scene_only_ignored() {
    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "BackButton", "Back", 0.0);
    labelled_button(&mut b, "ReturnButton", "Return", -100.0);
    assert!(run(&ConsistentIdentification, vec![b.parse("A.unity")]).is_empty());
}

// --- Text Resize ---

#[test]
fn test_text_resize_fixed_container() {
    let mut b = SceneBuilder::new();
    let t = b.node("Caption", None, (0.0, 0.0));
    b.text(t, "A long caption that may not fit");
    let findings = run(&TextResize, vec![b.parse("Page.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert!(findings[0].message().contains("requires runtime verification"));
}

#[test]
fn test_text_resize_flexible_layout_passes() {
    let mut b = SceneBuilder::new();
    let t = b.node("Caption", None, (0.0, 0.0));
    b.text(t, "A long caption that may not fit");
    b.size_fitter(t);
    let stretched = b.node("Body", None, (0.0, 0.0));
    b.stretch(stretched);
    b.text(stretched, "Stretches with its parent");
    assert!(run(&TextResize, vec![b.parse("Page.unity")]).is_empty());
}

// --- Text Contrast ---

fn contrast_scene(color: (f64, f64, f64), size: u32) -> SceneDocument {
    let mut b = SceneBuilder::new();
    let panel = b.node("Panel", None, (0.0, 0.0));
    b.image(panel, (1.0, 1.0, 1.0), None);
    let t = b.node("Caption", Some(panel), (0.0, 0.0));
    b.text_styled(t, "Hello", color, size);
    b.parse("Contrast.unity")
}

#[test]
fn test_contrast_severe_is_high() {
    let findings = run(&TextContrast, vec![contrast_scene((0.6, 0.6, 0.6), 14)]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::High);
    assert!(findings[0].message().contains("static estimate"));
}

#[test]
fn test_contrast_borderline_is_medium() {
    let findings = run(&TextContrast, vec![contrast_scene((0.5, 0.5, 0.5), 14)]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
}

#[test]
fn test_contrast_large_text_uses_lower_threshold() {
    assert!(run(&TextContrast, vec![contrast_scene((0.5, 0.5, 0.5), 24)]).is_empty());
    assert!(run(&TextContrast, vec![contrast_scene((0.0, 0.0, 0.0), 14)]).is_empty());
}

// --- Keyboard ---

#[test]
fn test_keyboard_navigation_none_is_high() {
    let mut b = SceneBuilder::new();
    let off = b.node("Hidden", None, (0.0, 0.0));
    b.button_nav(off, 0, None);
    let on = b.node("Visible", None, (0.0, -100.0));
    b.button_nav(on, 3, None);
    let findings = run(&KeyboardReachability, vec![b.parse("Keys.unity")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::High);
    assert_eq!(findings[0].subject(), "Hidden");
}

// --- Focus Visible ---

const SAME_TINT: &str = "m_Transition: 1\nm_Colors:\n  m_NormalColor: {r: 1, g: 1, b: 1, a: 1}\n  m_SelectedColor: {r: 1, g: 1, b: 1, a: 1}";
const DISTINCT_TINT: &str = "m_Transition: 1\nm_Colors:\n  m_NormalColor: {r: 1, g: 1, b: 1, a: 1}\n  m_SelectedColor: {r: 0.96, g: 0.96, b: 0.6, a: 1}";

fn transition_scene(transition: &str) -> SceneDocument {
    let mut b = SceneBuilder::new();
    let n = b.node("Play", None, (0.0, 0.0));
    b.button_transition(n, transition);
    b.parse("Focus.unity")
}

#[test]
fn test_focus_visible_no_transition() {
    let findings = run(&FocusVisible, vec![transition_scene("m_Transition: 0")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Medium);
    assert_eq!(findings[0].criterion(), "2.4.7");
    assert_eq!(findings[0].subject(), "Play");
    assert!(findings[0].message().contains("no selection transition"));
}

#[test]
fn test_focus_visible_identical_tint() {
    let findings = run(&FocusVisible, vec![transition_scene(SAME_TINT)]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message().contains("same colour"));
    assert!(run(&FocusVisible, vec![transition_scene(DISTINCT_TINT)]).is_empty());
}

#[test]
fn test_focus_visible_sprite_swap() {
    let missing = "m_Transition: 2\nm_SpriteState:\n  m_HighlightedSprite: {fileID: 0}\n  m_SelectedSprite: {fileID: 0}";
    let findings = run(&FocusVisible, vec![transition_scene(missing)]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message().contains("no selected sprite"));

    let present = "m_Transition: 2\nm_SpriteState:\n  m_SelectedSprite: {fileID: 21300000, guid: cccccccccccccccccccccccccccccccc, type: 3}";
    assert!(run(&FocusVisible, vec![transition_scene(present)]).is_empty());
}

#[test]
fn test_focus_visible_skips_unknown_and_disabled() {
    // animation transitions and missing settings cannot be judged statically
    assert!(run(&FocusVisible, vec![transition_scene("m_Transition: 3")]).is_empty());
    assert!(run(&FocusVisible, vec![transition_scene("m_Transition: 1")]).is_empty());

    let mut b = SceneBuilder::new();
    labelled_button(&mut b, "Plain", "Plain", 0.0);
    let off = b.node("Locked", None, (0.0, -100.0));
    b.button_disabled(off, "m_Transition: 0");
    assert!(run(&FocusVisible, vec![b.parse("Focus.unity")]).is_empty());
}

// --- Registry ---

#[test]
fn test_empty_corpus_never_panics() {
    for analyzer in all_analyzers() {
        assert!(run(analyzer.as_ref(), Vec::new()).is_empty(), "{}", analyzer.name());
    }
}

#[test]
fn test_registry_ids_are_unique_criteria() {
    let mut ids: Vec<&str> = all_analyzers().iter().map(|a| a.criterion().id).collect();
    assert_eq!(ids.len(), 9);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 9);
}

#[test]
fn test_disabled_analyzers_are_skipped() {
    let rules = RuleConfig {
        disabled: vec!["1.4.3".into(), "2.1.1".into()],
        ..RuleConfig::default()
    };
    let ids: Vec<&str> = enabled_analyzers(&rules).iter().map(|a| a.criterion().id).collect();
    assert_eq!(ids.len(), 7);
    assert!(!ids.contains(&"1.4.3"));
    assert!(!ids.contains(&"2.1.1"));
}
