//! Shared CLI presentation utilities.
//!
//! Reusable display and formatting functions for consistent output
//! across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services or handler-local helpers

pub mod tables;

// Re-export commonly used items
pub use tables::{format_bytes, format_optional, print_separator, truncate_string};

use symkit_core::text::fold_to_ascii;

/// Print one output line, folding it to ASCII when requested.
///
/// ANSI escapes are already ASCII, so colors survive the fold; only
/// glyphs and accented text are rewritten.
pub fn emit_line(line: &str, ascii: bool) {
    if ascii {
        println!("{}", fold_to_ascii(line));
    } else {
        println!("{line}");
    }
}
