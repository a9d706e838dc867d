// src/reporting/console.rs
//! Coloured terminal report, grouped by category.

use colored::Colorize;

use super::pluralize;
use crate::aggregate::{AggregatedReport, CATEGORIES};
use crate::audit::AuditOutcome;
use crate::types::{Finding, SceneWarning, Severity};

/// Prints findings by category, then scene warnings, then a summary line.
pub fn print_report(outcome: &AuditOutcome) {
    let report = &outcome.report;
    for category in CATEGORIES {
        let findings = report.category(category);
        if findings.is_empty() {
            continue;
        }
        println!("{} ({})", category.bold().underline(), findings.len());
        println!();
        for f in findings {
            print_finding(f);
        }
    }

    if !report.warnings().is_empty() {
        println!("{}", "Skipped scenes".bold().underline());
        for w in report.warnings() {
            print_warning(w);
        }
        println!();
    }

    print_summary(outcome, report);
}

fn print_finding(f: &Finding) {
    let header = format!("{}: [{} {}] {}", f.severity().label().to_uppercase(), f.criterion(), f.level(), f.message());
    match f.severity() {
        Severity::Critical | Severity::High => println!("{}", header.red().bold()),
        Severity::Medium => println!("{}", header.yellow()),
        Severity::Low | Severity::Info => println!("{}", header.dimmed()),
    }
    println!("  {} {} :: {}", "-->".blue(), f.scene(), f.subject());
    println!("   {} {} {}", "=".blue(), "FIX:".green(), f.recommendation());
    println!();
}

fn print_warning(w: &SceneWarning) {
    println!("  {} {} {}", "!".yellow().bold(), w.scene, format!("({}) {}", w.kind, w.message).dimmed());
}

fn print_summary(outcome: &AuditOutcome, report: &AggregatedReport) {
    let counts = report.counts();
    let scenes = format!(
        "{} of {} {}",
        outcome.scenes_analyzed,
        outcome.scenes_given,
        pluralize("scene", outcome.scenes_given)
    );

    if counts.total() == 0 {
        println!("{} No accessibility issues found in {scenes}.", "OK".green().bold());
        return;
    }

    let mut parts: Vec<String> = Vec::new();
    for (n, label) in [
        (counts.critical, "critical"),
        (counts.high, "high"),
        (counts.medium, "medium"),
        (counts.low, "low"),
    ] {
        if n > 0 {
            parts.push(format!("{n} {label}"));
        }
    }
    println!(
        "{} {} {} in {scenes}: {}",
        "AUDIT".red().bold(),
        counts.total(),
        pluralize("issue", counts.total()),
        parts.join(", ")
    );
}
