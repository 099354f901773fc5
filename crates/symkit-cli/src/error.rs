//! CLI-specific error types and mappings.
//!
//! Domain errors from `symkit-core` and `symkit-probe` are flattened
//! into [`CliError`] here so the entry point can map every failure to
//! a stable exit code.

use symkit_core::{ManifestError, ProbeError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest parse or content error.
    #[error("{0}")]
    Manifest(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Environment probing error.
    #[error("Probe failed: {0}")]
    Probe(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map the error to an exit code.
    ///
    /// Codes follow sysexits.h where one fits: usage errors exit 2 to
    /// match clap's own parse failures, the rest use the 64-78 range.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Manifest(_) => 65, // EX_DATAERR
            CliError::Probe(_) => 69,    // EX_UNAVAILABLE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Read { .. } => CliError::Io(err.to_string()),
            _ => CliError::Manifest(err.to_string()),
        }
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        CliError::Probe(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
