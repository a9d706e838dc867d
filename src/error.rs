// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneAuditError {
    /// The scene text does not follow the tagged-block grammar.
    #[error("parse error in {path}{}: {reason}", block_suffix(.block))]
    Parse {
        path: String,
        block: Option<i64>,
        reason: String,
    },

    /// The scene parsed but declares no game objects.
    #[error("scene {path} contains no game objects")]
    EmptyScene { path: String },

    /// A finding handed to the aggregator breaks the finding contract.
    #[error("malformed finding #{index}: {reason}")]
    AggregationInput { index: usize, reason: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("config error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

fn block_suffix(block: &Option<i64>) -> String {
    block.map(|b| format!(" (block &{b})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, SceneAuditError>;

impl SceneAuditError {
    pub(crate) fn parse(path: &str, block: Option<i64>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_string(),
            block,
            reason: reason.into(),
        }
    }

    /// Short machine-friendly tag used in report warnings.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse_error",
            Self::EmptyScene { .. } => "empty_scene",
            Self::AggregationInput { .. } => "aggregation_input",
            Self::Io { .. } => "io_error",
            Self::Config { .. } => "config_error",
            Self::Regex(_) => "regex_error",
        }
    }
}

// Allow `?` on std::io::Error by converting to SceneAuditError::Io with unknown path.
impl From<std::io::Error> for SceneAuditError {
    fn from(source: std::io::Error) -> Self {
        SceneAuditError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
