// src/bin/sceneaudit.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sceneaudit_core::cli::{self, Cli};
use sceneaudit_core::exit::SceneAuditExit;

fn main() -> SceneAuditExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(SceneAuditExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            SceneAuditExit::Error
        }
    }
}

/// Logs go to stderr so JSON on stdout stays parseable. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "sceneaudit=debug,sceneaudit_core=debug" } else { "sceneaudit=warn,sceneaudit_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
