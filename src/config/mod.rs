// src/config/mod.rs
pub mod io;
pub mod types;
pub mod vocabulary;

use std::path::Path;

pub use self::io::{CONFIG_FILE, IGNORE_FILE};
pub use self::types::{Config, RuleConfig, SceneAuditToml};
pub use self::vocabulary::Vocabulary;
use crate::error::Result;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and loads `sceneaudit.toml` and `.sceneauditignore`
    /// from `root`. Missing files keep the defaults.
    ///
    /// # Errors
    /// Returns error if `sceneaudit.toml` exists but cannot be parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::new();
        config.load_local_config(root)?;
        Ok(config)
    }

    /// # Errors
    /// Returns error if `sceneaudit.toml` exists but cannot be parsed.
    pub fn load_local_config(&mut self, root: &Path) -> Result<()> {
        io::load_ignore_file(self, root);
        io::load_toml_config(self, root)
    }

    pub fn process_ignore_line(&mut self, line: &str) {
        io::process_ignore_line(self, line);
    }

    /// # Errors
    /// Returns error on malformed TOML.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content, Path::new(CONFIG_FILE))
    }

    /// True when a scene path matches an ignore pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(path))
    }
}
