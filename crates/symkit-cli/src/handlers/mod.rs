//! Command handlers for the `symkit` binary.
//!
//! Every handler follows the same pattern: an `execute` function takes
//! the bootstrapped [`crate::bootstrap::CliContext`] plus its command
//! flags, loads what it needs, calls into `symkit-core`, and formats
//! the result for the terminal. Handlers never construct probes or
//! registries themselves.

use std::path::Path;

use anyhow::{Context, Result};
use symkit_core::Manifest;

use crate::error::CliError;

pub mod check;
pub mod extras;
pub mod lint;
pub mod list;

/// Read and parse a manifest, mapping failures to [`CliError`].
pub(crate) async fn load_manifest(path: &Path) -> Result<Manifest> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
        .with_context(|| format!("Could not read manifest {}", path.display()))?;
    let manifest = Manifest::parse_str(&text).map_err(CliError::from)?;
    Ok(manifest)
}
