//! List command handler.
//!
//! Shows manifest entries without touching the environment.

use anyhow::Result;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::handlers::load_manifest;
use crate::presentation::{emit_line, print_separator, truncate_string};

/// Execute the list command.
pub async fn execute(ctx: &CliContext, json_mode: bool) -> Result<()> {
    let manifest = load_manifest(ctx.manifest_path()).await?;

    if json_mode {
        let entries: Vec<serde_json::Value> = manifest
            .entries()
            .map(|entry| {
                json!({
                    "package": entry.normalized_name(),
                    "constraint": entry.constraint_text(),
                    "note": entry.comment,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if manifest.is_empty() {
        println!("No entries in {}.", ctx.manifest_path().display());
        return Ok(());
    }

    emit_line(
        &format!("{:<16} {:<12} NOTE", "PACKAGE", "CONSTRAINT"),
        ctx.ascii(),
    );
    print_separator(72);
    for entry in manifest.entries() {
        emit_line(
            &format!(
                "{:<16} {:<12} {}",
                entry.name,
                entry.constraint_text().unwrap_or_else(|| "-".to_string()),
                truncate_string(entry.comment.as_deref().unwrap_or(""), 42)
            ),
            ctx.ascii(),
        );
    }
    println!("\nFound {} entry(s) in {}", manifest.len(), ctx.manifest_path().display());
    Ok(())
}
