// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};

use super::types::{Config, SceneAuditToml};
use crate::error::{Result, SceneAuditError};

pub const CONFIG_FILE: &str = "sceneaudit.toml";
pub const IGNORE_FILE: &str = ".sceneauditignore";

/// Reads `.sceneauditignore` under `root`, if present.
pub fn load_ignore_file(config: &mut Config, root: &Path) {
    let path = root.join(IGNORE_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    for line in content.lines() {
        process_ignore_line(config, line);
    }
}

/// One ignore line: blank and `#` lines are skipped, bad patterns logged.
pub fn process_ignore_line(config: &mut Config, line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return;
    }
    match Regex::new(trimmed) {
        Ok(re) => config.exclude_patterns.push(re),
        Err(e) => warn!(pattern = trimmed, error = %e, "ignoring invalid ignore pattern"),
    }
}

/// Reads `sceneaudit.toml` under `root`. A missing file keeps the defaults.
///
/// # Errors
/// Returns [`SceneAuditError::Config`] if the file exists but is unreadable
/// or not valid TOML.
pub fn load_toml_config(config: &mut Config, root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(());
    }
    let content = fs::read_to_string(&path).map_err(|e| SceneAuditError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    parse_toml(config, &content, &path)
}

/// Applies TOML text to `config`.
///
/// # Errors
/// Returns [`SceneAuditError::Config`] on malformed TOML.
pub fn parse_toml(config: &mut Config, content: &str, path: &Path) -> Result<()> {
    let parsed: SceneAuditToml = toml::from_str(content).map_err(|e| SceneAuditError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    config.vocabulary = parsed.vocabulary;
    config.rules = parsed.rules;
    Ok(())
}

/// Writes a default `sceneaudit.toml` under `root`, refusing to overwrite.
///
/// # Errors
/// Returns error if the file already exists, serialization fails, or the
/// write fails.
pub fn save_default(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        return Err(SceneAuditError::Config {
            path,
            reason: "file already exists".to_string(),
        });
    }
    let content = toml::to_string_pretty(&SceneAuditToml::default()).map_err(|e| SceneAuditError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    fs::write(&path, content).map_err(|source| SceneAuditError::Io {
        source,
        path: path.clone(),
    })?;
    Ok(path)
}
