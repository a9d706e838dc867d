// src/cli/dispatch.rs
use anyhow::Result;

use super::args::Commands;
use super::handlers;
use crate::exit::SceneAuditExit;

/// Runs one subcommand.
///
/// # Errors
/// Propagates handler errors.
pub fn execute(cmd: Commands) -> Result<SceneAuditExit> {
    match cmd {
        Commands::Scan(args) => handlers::handle_scan(&args),
        Commands::Init { root } => handlers::handle_init(&root),
    }
}
