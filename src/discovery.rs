// src/discovery.rs
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::constants::{should_prune, SCENE_EXTENSION};

/// Finds every `*.unity` scene under `root`, minus ignored paths, sorted.
/// Ignore patterns match against the path relative to `root`.
#[must_use]
pub fn discover(root: &Path, config: &Config) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        warn!(errors = error_count, "encountered errors during scene discovery");
    }

    let mut scenes: Vec<PathBuf> = paths
        .into_iter()
        .filter(|p| is_scene(p))
        .filter(|p| !config.is_excluded(&normalize_path(p.strip_prefix(root).unwrap_or(p))))
        .collect();
    scenes.sort();
    debug!(root = %root.display(), scenes = scenes.len(), "discovered scenes");
    scenes
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_scene(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SCENE_EXTENSION))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
