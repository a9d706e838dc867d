// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How bad a finding is. `Info` is a traceability marker, never user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Ordering weight: higher is more severe.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Info => 0,
        }
    }

    #[must_use]
    pub fn is_issue(self) -> bool {
        self != Self::Info
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "info" => Ok(Self::Info),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::AA => f.write_str("AA"),
            Self::AAA => f.write_str("AAA"),
        }
    }
}

/// A success criterion in the stable taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub id: &'static str,
    pub level: WcagLevel,
    pub name: &'static str,
}

pub mod criteria {
    use super::{Criterion, WcagLevel};

    pub const CONTRAST: Criterion = Criterion { id: "1.4.3", level: WcagLevel::AA, name: "Contrast (Minimum)" };
    pub const RESIZE_TEXT: Criterion = Criterion { id: "1.4.4", level: WcagLevel::AA, name: "Resize Text" };
    pub const KEYBOARD: Criterion = Criterion { id: "2.1.1", level: WcagLevel::A, name: "Keyboard" };
    pub const PAGE_TITLED: Criterion = Criterion { id: "2.4.2", level: WcagLevel::A, name: "Page Titled" };
    pub const FOCUS_ORDER: Criterion = Criterion { id: "2.4.3", level: WcagLevel::A, name: "Focus Order" };
    pub const FOCUS_VISIBLE: Criterion = Criterion { id: "2.4.7", level: WcagLevel::AA, name: "Focus Visible" };
    pub const HEADINGS_AND_LABELS: Criterion = Criterion { id: "2.4.6", level: WcagLevel::AA, name: "Headings and Labels" };
    pub const CONSISTENT_NAVIGATION: Criterion = Criterion { id: "3.2.3", level: WcagLevel::AA, name: "Consistent Navigation" };
    pub const CONSISTENT_IDENTIFICATION: Criterion = Criterion { id: "3.2.4", level: WcagLevel::AA, name: "Consistent Identification" };
}

/// A single accessibility finding.
///
/// Fields are read-only after construction; re-tagging builds a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    criterion: String,
    level: WcagLevel,
    severity: Severity,
    scene: String,
    subject: String,
    message: String,
    recommendation: String,
    #[serde(default = "default_automated")]
    automated: bool,
}

const fn default_automated() -> bool {
    true
}

impl Finding {
    /// Creates an automated finding for `criterion`.
    #[must_use]
    pub fn new(
        criterion: &Criterion,
        severity: Severity,
        scene: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            criterion: criterion.id.to_string(),
            level: criterion.level,
            severity,
            scene: scene.into(),
            subject: subject.into(),
            message: message.into(),
            recommendation: recommendation.into(),
            automated: true,
        }
    }

    /// Returns a copy carrying a different severity.
    #[must_use]
    pub fn with_severity(&self, severity: Severity) -> Self {
        Self { severity, ..self.clone() }
    }

    #[must_use]
    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    #[must_use]
    pub fn level(&self) -> WcagLevel {
        self.level
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn scene(&self) -> &str {
        &self.scene
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    #[must_use]
    pub fn automated(&self) -> bool {
        self.automated
    }

    /// Identity used for deduplication.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.criterion, &self.scene, &self.subject)
    }
}

/// A scene that could not be analyzed. Carried in the report, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneWarning {
    pub scene: String,
    pub kind: String,
    pub message: String,
}

impl SceneWarning {
    #[must_use]
    pub fn from_error(scene: &str, err: &crate::error::SceneAuditError) -> Self {
        Self {
            scene: scene.to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
