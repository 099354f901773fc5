//! Subcommand definitions for the `symkit` binary.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Probe the environment and report every optional capability
    Check {
        /// Exit nonzero unless every capability is enabled
        #[arg(long)]
        strict: bool,

        /// Print the full report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show manifest entries without probing the environment
    List {
        /// Print entries as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report duplicate entries, impossible constraints, and unknown packages
    Lint {
        /// Manifest to lint instead of the configured one
        path: Option<PathBuf>,
    },

    /// Describe the known optional capabilities and their engines
    Extras,
}
