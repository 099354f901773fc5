//! Extras command handler.
//!
//! Describes the capability registry itself: what each package
//! unlocks and which engines it drives. No manifest or environment
//! access.

use anyhow::Result;
use symkit_core::text::{Grid, decode_named};

use crate::bootstrap::CliContext;
use crate::presentation::emit_line;

/// Execute the extras command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let mut grid = Grid::new();
    grid.push_row(["FEATURE", "PACKAGE", "UNLOCKS", "SUMMARY"]);
    for extra in ctx.registry().iter() {
        let mut summary = decode_named(extra.summary);
        if !extra.backends.is_empty() {
            summary.push_str("\nengines: ");
            summary.push_str(&extra.backends.join(", "));
        }
        grid.push_row([
            extra.feature.to_string(),
            extra.package.to_string(),
            extra.unlocks.join("\n"),
            summary,
        ]);
    }

    for line in grid.layout()?.lines() {
        emit_line(line, ctx.ascii());
    }
    Ok(())
}
