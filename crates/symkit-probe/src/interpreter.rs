//! Python interpreter discovery and queries.
//!
//! Discovery prefers an explicit override, then searches PATH for the
//! usual interpreter names. Queries shell out to the interpreter itself;
//! the import paths come back as JSON so no output parsing heuristics
//! are needed.

use std::path::{Path, PathBuf};
use std::process::Command;

use symkit_core::{ProbeError, Version};
use tracing::debug;

#[cfg(target_os = "windows")]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// One-line program printing the interpreter's import paths as JSON.
const SYS_PATH_QUERY: &str = "import json, sys; print(json.dumps(sys.path))";

/// A located Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    path: PathBuf,
    version: Option<Version>,
}

impl Interpreter {
    /// Locate an interpreter, honoring an explicit override.
    ///
    /// The override is taken as-is; a bad path surfaces later as a query
    /// error naming it. Without an override, PATH is searched for the
    /// platform's candidate names.
    pub fn discover(override_path: Option<&Path>) -> Result<Self, ProbeError> {
        if let Some(path) = override_path {
            return Ok(Self {
                path: path.to_path_buf(),
                version: query_version(path),
            });
        }

        for candidate in PYTHON_CANDIDATES {
            if let Ok(path) = which::which(candidate) {
                debug!(python = %path.display(), "interpreter found on PATH");
                let version = query_version(&path);
                return Ok(Self { path, version });
            }
        }

        Err(ProbeError::InterpreterNotFound {
            tried: PYTHON_CANDIDATES.join(", "),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// The interpreter's import paths, empty entries dropped.
    pub fn site_paths(&self) -> Result<Vec<PathBuf>, ProbeError> {
        let output = Command::new(&self.path)
            .arg("-c")
            .arg(SYS_PATH_QUERY)
            .output()
            .map_err(|e| ProbeError::QueryFailed {
                reason: format!("{}: {e}", self.path.display()),
            })?;

        if !output.status.success() {
            return Err(ProbeError::QueryFailed {
                reason: format!("{} exited with {}", self.path.display(), output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let paths: Vec<String> = serde_json::from_str(stdout.trim()).map_err(|e| {
            ProbeError::QueryDecodeFailed {
                reason: e.to_string(),
            }
        })?;

        Ok(paths
            .into_iter()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

/// Best-effort version query; any failure reads as an unknown version.
fn query_version(path: &Path) -> Option<Version> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    // Old interpreters printed the banner to stderr
    let banner = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    parse_version_banner(&banner)
}

fn parse_version_banner(banner: &str) -> Option<Version> {
    banner.split_whitespace().nth(1)?.parse().ok()
}
