// src/config/types.rs
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::vocabulary::Vocabulary;
use crate::types::Severity;

/// Thresholds and switches for the analyzers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Vertical tolerance for grouping elements into one visual row.
    #[serde(default = "default_row_band")]
    pub row_band: f64,
    #[serde(default = "default_contrast_normal")]
    pub contrast_normal: f64,
    #[serde(default = "default_contrast_large")]
    pub contrast_large: f64,
    #[serde(default = "default_large_font_size")]
    pub large_font_size: f64,
    #[serde(default = "default_large_bold_font_size")]
    pub large_bold_font_size: f64,
    /// Criteria whose analyzers are skipped, e.g. `"1.4.3"`.
    #[serde(default)]
    pub disabled: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Severity>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            row_band: default_row_band(),
            contrast_normal: default_contrast_normal(),
            contrast_large: default_contrast_large(),
            large_font_size: default_large_font_size(),
            large_bold_font_size: default_large_bold_font_size(),
            disabled: Vec::new(),
            fail_on: None,
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn is_disabled(&self, criterion: &str) -> bool {
        self.disabled.iter().any(|c| c.trim() == criterion)
    }
}

const fn default_row_band() -> f64 { crate::extract::ROW_BAND }
const fn default_contrast_normal() -> f64 { 4.5 }
const fn default_contrast_large() -> f64 { 3.0 }
const fn default_large_font_size() -> f64 { 18.0 }
const fn default_large_bold_font_size() -> f64 { 14.0 }

/// On-disk shape of `sceneaudit.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SceneAuditToml {
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub exclude_patterns: Vec<Regex>,
    pub vocabulary: Vocabulary,
    pub rules: RuleConfig,
}
