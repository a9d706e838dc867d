// src/constants.rs
//! Discovery constants for Unity project trees.

/// Directories never searched for scenes: Unity's generated caches, build
/// output and VCS metadata.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".vs",
    ".idea",
    "Library",
    "Temp",
    "Logs",
    "obj",
    "Build",
    "Builds",
    "UserSettings",
    "MemoryCaptures",
    "node_modules",
    "target",
];

/// Extension of Unity scene files.
pub const SCENE_EXTENSION: &str = "unity";

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}
