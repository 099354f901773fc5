//! The default [`EnvironmentProbe`] implementation.
//!
//! Probes the live system: real interpreter, real site directories,
//! real PATH. The CLI constructs one at bootstrap and hands it to the
//! core as a trait object.

use std::path::PathBuf;

use symkit_core::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};
use tracing::debug;

use crate::interpreter::Interpreter;
use crate::{binaries, memory, site};

#[derive(Debug, Clone, Default)]
pub struct DefaultEnvironmentProbe {
    python_override: Option<PathBuf>,
}

impl DefaultEnvironmentProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe a specific interpreter instead of searching PATH.
    #[must_use]
    pub fn with_python(mut self, path: impl Into<PathBuf>) -> Self {
        self.python_override = Some(path.into());
        self
    }

    /// The interpreter this probe will query.
    pub fn interpreter(&self) -> Result<Interpreter, ProbeError> {
        Interpreter::discover(self.python_override.as_deref())
    }
}

impl EnvironmentProbe for DefaultEnvironmentProbe {
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>, ProbeError> {
        let interpreter = self.interpreter()?;
        debug!(python = %interpreter.path().display(), "probing interpreter");
        let paths = interpreter.site_paths()?;
        Ok(site::scan_import_paths(&paths))
    }

    fn find_backend(&self, name: &str) -> Option<PathBuf> {
        binaries::find_backend(name)
    }

    fn memory_reading(&self) -> Option<MemoryReading> {
        memory::memory_reading()
    }
}
