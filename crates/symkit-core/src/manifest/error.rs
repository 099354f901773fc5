//! Manifest error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::VersionError;

/// Errors raised while reading or parsing an extras manifest.
///
/// Parse variants carry the 1-based line number of the offending line.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("line {line}: expected a package specifier, got {text:?}")]
    InvalidSpecifier { line: usize, text: String },

    #[error("line {line}: invalid package name {name:?}")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: {source}")]
    InvalidConstraint {
        line: usize,
        #[source]
        source: VersionError,
    },

    #[error("failed to read manifest at {path}: {reason}")]
    Read { path: PathBuf, reason: String },
}

impl ManifestError {
    /// Source line the error points at, when it is a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidSpecifier { line, .. }
            | Self::InvalidName { line, .. }
            | Self::InvalidConstraint { line, .. } => Some(*line),
            Self::Read { .. } => None,
        }
    }
}
