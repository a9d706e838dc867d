// src/exit.rs
//! Standardized process exit codes for `sceneaudit`.
//!
//! Provides a stable contract for scripts and CI pipelines.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SceneAuditExit {
    /// Audit completed; no threshold was crossed.
    Success = 0,
    /// Generic error (e.g. IO, config, malformed finding).
    Error = 1,
    /// No scene was found or none could be parsed.
    NoScenes = 2,
    /// A finding reached the `--fail-on` severity.
    ThresholdExceeded = 3,
}

impl SceneAuditExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SceneAuditExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
