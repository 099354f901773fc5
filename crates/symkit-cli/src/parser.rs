//! Main CLI parser and top-level argument handling.
//!
//! Defines the root structure with the global options shared by every
//! subcommand. Subcommands themselves live in [`crate::commands`].

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting optional capabilities.
#[derive(Parser)]
#[command(name = "symkit")]
#[command(about = "Inspect the optional capabilities of a symbolic computation environment")]
#[command(version)]
pub struct Cli {
    /// Path to the extras manifest
    #[arg(long, global = true, env = "SYMKIT_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Python interpreter to probe instead of searching PATH
    #[arg(long, global = true, env = "SYMKIT_PYTHON")]
    pub python: Option<PathBuf>,

    /// Fold all output to plain ASCII
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
