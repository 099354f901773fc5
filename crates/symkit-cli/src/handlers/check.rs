//! Check command handler.
//!
//! Probes the environment and prints one row per manifest entry, with
//! install hints as superscript footnotes for anything missing or
//! outdated.

use anyhow::{Context, Result};
use symkit_core::text::footnote_marker;
use symkit_core::{CapabilityReport, EntryReport, EntryStatus, build_report};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::load_manifest;
use crate::presentation::{emit_line, format_bytes};

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check command.
///
/// With `--json` the raw report is printed instead of the table. With
/// `--strict` the command fails unless every capability is enabled.
pub async fn execute(ctx: &CliContext, strict: bool, json: bool) -> Result<()> {
    let manifest = load_manifest(ctx.manifest_path()).await?;

    // The probe shells out to an interpreter and walks site directories,
    // so it runs off the async executor.
    let registry = ctx.registry().clone();
    let probe = ctx.probe().clone();
    let report =
        tokio::task::spawn_blocking(move || build_report(&manifest, &registry, probe.as_ref()))
            .await
            .context("Probe task failed")?
            .map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, ctx.ascii());

    if strict && !report.is_complete() {
        anyhow::bail!(
            "{} of {} optional capabilities unavailable",
            report.entries.len() - report.present(),
            report.entries.len()
        );
    }
    Ok(())
}

fn print_report(report: &CapabilityReport, ascii: bool) {
    emit_line(
        &format!("{}{}Checking optional capabilities...{}\n", BOLD, BLUE, RESET),
        ascii,
    );
    emit_line(
        &format!(
            "{}  {:<14} {:<12} {:<14} {:<26} NOTES{}",
            BOLD, "PACKAGE", "INSTALLED", "CONSTRAINT", "FEATURE", RESET
        ),
        ascii,
    );
    emit_line(&"=".repeat(88), ascii);

    let mut hints: Vec<String> = Vec::new();
    for entry in &report.entries {
        print_entry(entry, &mut hints, ascii);
    }

    emit_line(&"=".repeat(88), ascii);
    print_summary(report, ascii);

    if let Some(memory) = report.memory {
        emit_line(
            &format!(
                "\n{}System memory:{} {} total, {} available",
                BOLD,
                RESET,
                format_bytes(memory.total_bytes),
                format_bytes(memory.available_bytes)
            ),
            ascii,
        );
    }

    if !hints.is_empty() {
        emit_line("", ascii);
        for (number, hint) in hints.iter().enumerate() {
            emit_line(&format!("  {} {}", footnote_marker(number + 1), hint), ascii);
        }
    }
}

fn print_entry(entry: &EntryReport, hints: &mut Vec<String>, ascii: bool) {
    let (glyph, installed) = match &entry.status {
        EntryStatus::Present {
            version: Some(version),
        } => (format!("{}✓{}", GREEN, RESET), version.to_string()),
        EntryStatus::Present { version: None } => {
            (format!("{}✓{}", GREEN, RESET), "unversioned".to_string())
        }
        EntryStatus::Outdated { installed } => {
            (format!("{}○{}", YELLOW, RESET), installed.to_string())
        }
        EntryStatus::Missing => (format!("{}✗{}", RED, RESET), "-".to_string()),
    };

    let mut note = entry.detail.clone();
    if !matches!(entry.status, EntryStatus::Present { .. }) {
        hints.push(install_hint(entry));
        note.push_str(&footnote_marker(hints.len()));
    }

    emit_line(
        &format!(
            "{} {:<14} {:<12} {:<14} {:<26} {}",
            glyph,
            entry.package,
            installed,
            entry.constraint.as_deref().unwrap_or("-"),
            entry.feature.as_deref().unwrap_or("-"),
            note
        ),
        ascii,
    );

    if let Some(backend) = &entry.backend {
        let line = match &backend.selected {
            Some(selected) => format!(
                "    {}engine:{} {} ({})",
                BOLD,
                RESET,
                selected.name,
                selected.path.display()
            ),
            None => format!(
                "    {}no engine on PATH{} (candidates: {})",
                YELLOW,
                RESET,
                backend.candidates.join(", ")
            ),
        };
        emit_line(&line, ascii);
    }
}

fn print_summary(report: &CapabilityReport, ascii: bool) {
    let total = report.entries.len();
    if report.is_complete() {
        emit_line(
            &format!(
                "{}✓ All optional capabilities are enabled!{} ({}/{})",
                GREEN,
                RESET,
                report.present(),
                total
            ),
            ascii,
        );
    } else {
        emit_line(
            &format!(
                "{}✗ {} of {} optional capabilities enabled{} ({} missing, {} outdated)",
                YELLOW,
                report.present(),
                total,
                RESET,
                report.missing(),
                report.outdated()
            ),
            ascii,
        );
    }
}

/// Shell-ready install hint for a missing or outdated entry.
fn install_hint(entry: &EntryReport) -> String {
    match &entry.constraint {
        Some(constraint) => format!(
            "pip install \"{}{}\"",
            entry.package,
            constraint.replace(' ', "")
        ),
        None => format!("pip install {}", entry.package),
    }
}
