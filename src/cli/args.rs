// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::reporting::OutputFormat;
use crate::types::Severity;

#[derive(Parser)]
#[command(name = "sceneaudit", version, about = "Static accessibility audit for Unity scenes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit every scene under a project root
    Scan(ScanArgs),
    /// Write a default sceneaudit.toml
    Init {
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Project root to search for *.unity scenes
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// terminal or json
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
    /// Also write sceneaudit-report.json into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// JSON array of precomputed findings to merge
    #[arg(long, value_name = "FILE")]
    pub visual_findings: Option<PathBuf>,
    /// Exit with code 3 when a finding reaches this severity
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
}
