//! Environment probe port for Python package and engine detection.
//!
//! This port abstracts active probing (interpreter queries, PATH lookups,
//! memory readings) from the core domain. Implementations live in adapters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// Errors that can occur while probing the environment.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No usable Python interpreter was found.
    #[error("No Python interpreter found (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// Running an interpreter query failed.
    #[error("Interpreter query failed: {reason}")]
    QueryFailed { reason: String },

    /// Interpreter output could not be decoded.
    #[error("Could not decode interpreter output: {reason}")]
    QueryDecodeFailed { reason: String },

    /// A package directory could not be scanned.
    #[error("Could not scan {path}: {reason}")]
    ScanFailed { path: PathBuf, reason: String },
}

/// A Python package found in the probed environment.
///
/// Names are already normalized; versions are absent when the installed
/// metadata carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: Option<Version>,
}

/// A point-in-time system memory reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReading {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Port for probing the Python environment and the host system.
///
/// Implementations perform active probing by running the interpreter,
/// scanning package directories, and searching PATH. The core domain uses
/// this trait to stay pure and testable.
pub trait EnvironmentProbe: Send + Sync {
    /// Packages visible to the probed interpreter.
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>, ProbeError>;

    /// Absolute path of an engine binary on PATH, if present.
    fn find_backend(&self, name: &str) -> Option<PathBuf>;

    /// Current memory figures, or None when the platform reports nothing.
    fn memory_reading(&self) -> Option<MemoryReading>;
}
