// src/analysis/navigation.rs
//! Cross-scene comparison of navigation containers.
//!
//! The first scene (corpus order) holding a container is its baseline.
//! Later scenes must repeat the same children in the same order, and a
//! container seen in two or more scenes must not vanish from a later one.

use std::collections::{HashMap, HashSet};

use super::{AnalysisContext, Analyzer, SceneCorpus};
use crate::extract::{extract_navigation_containers, NavigationContainer};
use crate::types::{criteria, Criterion, Finding, Severity};

/// 3.2.3: repeated navigation keeps the same relative order.
pub struct ConsistentNavigation;

impl Analyzer for ConsistentNavigation {
    fn criterion(&self) -> Criterion {
        criteria::CONSISTENT_NAVIGATION
    }

    fn name(&self) -> &'static str {
        "Consistent Navigation"
    }

    fn analyze(&self, corpus: &SceneCorpus, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let matcher = ctx.vocabulary.navigation_matcher();
        let per_scene: Vec<(&str, HashMap<String, NavigationContainer>)> = corpus
            .iter()
            .map(|doc| (doc.path(), first_by_name(extract_navigation_containers(doc, &matcher))))
            .collect();

        let mut names: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, containers) in &per_scene {
            let mut scene_names: Vec<&str> = containers.keys().map(String::as_str).collect();
            scene_names.sort_unstable();
            names.extend(scene_names.into_iter().filter(|n| seen.insert(*n)));
        }

        names
            .into_iter()
            .flat_map(|name| compare_container(name, &per_scene))
            .collect()
    }
}

/// Keeps the first declared container of each name.
fn first_by_name(containers: Vec<NavigationContainer>) -> HashMap<String, NavigationContainer> {
    let mut map = HashMap::new();
    for c in containers {
        map.entry(c.container_name.clone()).or_insert(c);
    }
    map
}

fn compare_container(name: &str, per_scene: &[(&str, HashMap<String, NavigationContainer>)]) -> Vec<Finding> {
    let occurrences: Vec<(usize, &str, &NavigationContainer)> = per_scene
        .iter()
        .enumerate()
        .filter_map(|(i, (scene, containers))| containers.get(name).map(|c| (i, *scene, c)))
        .collect();
    if occurrences.len() < 2 {
        return Vec::new();
    }

    let (base_index, base_scene, baseline) = occurrences[0];
    let mut findings: Vec<Finding> = occurrences[1..]
        .iter()
        .filter(|(_, _, c)| c.child_element_names != baseline.child_element_names)
        .map(|(_, scene, c)| order_finding(name, scene, c, base_scene, baseline))
        .collect();

    let present: HashSet<usize> = occurrences.iter().map(|(i, _, _)| *i).collect();
    findings.extend(
        per_scene
            .iter()
            .enumerate()
            .skip(base_index + 1)
            .filter(|(i, _)| !present.contains(i))
            .map(|(_, (scene, _))| {
                Finding::new(
                    &criteria::CONSISTENT_NAVIGATION,
                    Severity::Medium,
                    *scene,
                    name,
                    format!("Navigation container '{name}' present in {base_scene} is missing from this scene"),
                    "Keep shared navigation on every screen that offers it, or document why this screen differs",
                )
            }),
    );
    findings
}

fn order_finding(
    name: &str,
    scene: &str,
    container: &NavigationContainer,
    base_scene: &str,
    baseline: &NavigationContainer,
) -> Finding {
    let mut ours = container.child_element_names.clone();
    let mut theirs = baseline.child_element_names.clone();
    ours.sort();
    theirs.sort();
    let what = if ours == theirs { "reordered" } else { "changed" };

    Finding::new(
        &criteria::CONSISTENT_NAVIGATION,
        Severity::Medium,
        scene,
        name,
        format!(
            "Navigation container '{name}' is {what}: [{}] here, [{}] in {base_scene}",
            container.child_element_names.join(", "),
            baseline.child_element_names.join(", "),
        ),
        "Present repeated navigation items in the same order on every screen",
    )
}
