// src/config/vocabulary.rs
//! Heuristic word lists shared by the extractors and analyzers.
//!
//! Loaded once, never mutated, and handed to analyzers by reference so a
//! test can swap in its own lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_vague_terms")]
    pub vague_terms: Vec<String>,
    #[serde(default = "default_min_label_length")]
    pub min_label_length: usize,
    #[serde(default = "default_navigation_patterns")]
    pub navigation_patterns: Vec<String>,
    #[serde(default = "default_title_patterns")]
    pub title_patterns: Vec<String>,
    /// Component kind labels that let text grow with its content.
    #[serde(default = "default_flexible_layout_markers")]
    pub flexible_layout_markers: Vec<String>,
    /// Canonical function name to the name fragments that imply it.
    #[serde(default = "default_function_buckets")]
    pub function_buckets: BTreeMap<String, Vec<String>>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            vague_terms: default_vague_terms(),
            min_label_length: default_min_label_length(),
            navigation_patterns: default_navigation_patterns(),
            title_patterns: default_title_patterns(),
            flexible_layout_markers: default_flexible_layout_markers(),
            function_buckets: default_function_buckets(),
        }
    }
}

impl Vocabulary {
    /// A label is vague when, trimmed and lowercased, it is a listed term
    /// or shorter than `min_label_length` characters.
    #[must_use]
    pub fn is_vague(&self, label: &str) -> bool {
        let normalized = normalize(label);
        normalized.chars().count() < self.min_label_length
            || self.vague_terms.iter().any(|t| normalize(t) == normalized)
    }

    /// Case-insensitive substring match against `navigation_patterns`.
    pub fn navigation_matcher(&self) -> impl Fn(&str) -> bool + '_ {
        move |name: &str| contains_any(name, &self.navigation_patterns)
    }

    /// Case-insensitive substring match against `title_patterns`.
    pub fn title_matcher(&self) -> impl Fn(&str) -> bool + '_ {
        move |name: &str| contains_any(name, &self.title_patterns)
    }

    /// The first bucket, in name order, with a fragment inside `name`.
    #[must_use]
    pub fn bucket_for(&self, name: &str) -> Option<&str> {
        self.function_buckets
            .iter()
            .find(|(_, fragments)| contains_any(name, fragments))
            .map(|(bucket, _)| bucket.as_str())
    }

    #[must_use]
    pub fn is_flexible_marker(&self, kind_label: &str) -> bool {
        self.flexible_layout_markers.iter().any(|m| m == kind_label)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn contains_any(name: &str, patterns: &[String]) -> bool {
    let name = name.to_lowercase();
    patterns
        .iter()
        .map(|p| p.to_lowercase())
        .any(|p| !p.is_empty() && name.contains(&p))
}

fn default_vague_terms() -> Vec<String> {
    [
        "ok", "okay", "submit", "click here", "click", "here", "go", "more", "button", "link", "text",
        "label", "untitled",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

const fn default_min_label_length() -> usize { 3 }

fn default_navigation_patterns() -> Vec<String> {
    vec!["nav".into(), "menu".into(), "header".into()]
}

fn default_title_patterns() -> Vec<String> {
    vec!["title".into(), "heading".into()]
}

fn default_flexible_layout_markers() -> Vec<String> {
    vec!["ContentSizeFitter".into(), "LayoutGroup".into(), "LayoutElement".into()]
}

fn default_function_buckets() -> BTreeMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        ("back", &["back", "return", "previous", "prev"]),
        ("next", &["next", "continue", "forward"]),
        ("save", &["save"]),
        ("cancel", &["cancel", "close", "dismiss"]),
        ("help", &["help"]),
        ("settings", &["settings", "options", "preferences"]),
    ];
    table
        .iter()
        .map(|(bucket, fragments)| {
            (
                (*bucket).to_string(),
                fragments.iter().map(|f| (*f).to_string()).collect(),
            )
        })
        .collect()
}
