// src/analysis/titling.rs
use super::{AnalysisContext, Analyzer, SceneCorpus};
use crate::scene::{ComponentKind, SceneDocument};
use crate::types::{criteria, Criterion, Finding, Severity};

/// Subject used when a scene has no title object at all.
pub const SCENE_TITLE_SUBJECT: &str = "scene title";

/// 2.4.2: every scene names itself with a visible, marked-up title.
pub struct SceneTitling;

impl Analyzer for SceneTitling {
    fn criterion(&self) -> Criterion {
        criteria::PAGE_TITLED
    }

    fn name(&self) -> &'static str {
        "Scene Titling"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        corpus.iter().filter_map(|doc| check_scene(doc, ctx)).collect()
    }
}

fn check_scene(doc: &SceneDocument, ctx: &AnalysisContext<'_>) -> Option<Finding> {
    let is_title = ctx.vocabulary.title_matcher();

    let candidates: Vec<_> = doc.objects().iter().filter(|o| is_title(&o.name)).collect();
    let titled: Vec<_> = candidates
        .iter()
        .filter(|o| o.text().is_some_and(|t| !t.trim().is_empty()))
        .collect();

    let Some(first) = titled.first() else {
        let (subject, message) = match candidates.first() {
            Some(o) => (o.name.clone(), format!("Title object '{}' has no visible text", o.name)),
            None => (SCENE_TITLE_SUBJECT.to_string(), "Scene has no title or heading object".to_string()),
        };
        return Some(Finding::new(
            &criteria::PAGE_TITLED,
            Severity::Medium,
            doc.path(),
            subject,
            message,
            "Add a title text object that names the screen, and mark it up with an accessibility node",
        ));
    };

    if titled.iter().any(|o| o.has(ComponentKind::AccessibilityNode)) {
        return None;
    }
    Some(Finding::new(
        &criteria::PAGE_TITLED,
        Severity::Medium,
        doc.path(),
        first.name.clone(),
        format!("Title '{}' has no accessibility markup", first.name),
        "Attach an accessibility node with a heading role to the title so assistive technology announces it",
    ))
}
