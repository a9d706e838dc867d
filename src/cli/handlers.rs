// src/cli/handlers.rs
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::args::ScanArgs;
use crate::audit::{self, AuditOptions};
use crate::config::io::save_default;
use crate::exit::SceneAuditExit;
use crate::reporting::{console, json, OutputFormat};

/// Handles `sceneaudit scan`.
///
/// # Errors
/// Returns error on config, IO or report failures.
pub fn handle_scan(args: &ScanArgs) -> Result<SceneAuditExit> {
    let options = AuditOptions {
        visual_findings: args.visual_findings.clone(),
        fail_on: args.fail_on,
    };
    let outcome = audit::run_project(&args.root, &options)?;

    match args.format {
        OutputFormat::Json => println!("{}", json::render(&outcome.report)?),
        OutputFormat::Terminal => console::print_report(&outcome),
    }
    if let Some(dir) = &args.out_dir {
        let path = json::write_to_dir(&outcome.report, dir)?;
        eprintln!("{} {}", "Report written to".dimmed(), path.display());
    }

    if outcome.nothing_analyzable() {
        eprintln!(
            "{} no analyzable scenes under {}",
            "warning:".yellow().bold(),
            args.root.display()
        );
        return Ok(SceneAuditExit::NoScenes);
    }
    if outcome.threshold_exceeded() {
        return Ok(SceneAuditExit::ThresholdExceeded);
    }
    Ok(SceneAuditExit::Success)
}

/// Handles `sceneaudit init`.
///
/// # Errors
/// Returns error if the config file exists or cannot be written.
pub fn handle_init(root: &Path) -> Result<SceneAuditExit> {
    let path = save_default(root)?;
    println!("{} {}", "Created".green().bold(), path.display());
    Ok(SceneAuditExit::Success)
}
