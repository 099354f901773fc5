//! Engine executable lookup on PATH.

use std::path::PathBuf;

use tracing::debug;

/// Absolute path of `name` on PATH, if any.
pub fn find_backend(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            debug!(engine = name, path = %path.display(), "engine found");
            Some(path)
        }
        Err(_) => None,
    }
}
