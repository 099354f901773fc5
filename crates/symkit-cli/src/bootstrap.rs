//! CLI bootstrap and composition root.
//!
//! The only place where infrastructure meets the domain: the live
//! environment probe is constructed here and handed to command
//! handlers through [`CliContext`]. Handlers never build probes
//! themselves, which keeps them testable with stub implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use symkit_core::{EnvironmentProbe, ExtrasRegistry};
use symkit_probe::DefaultEnvironmentProbe;
use tracing::debug;

/// Manifest file names searched in the working directory, in order.
const MANIFEST_CANDIDATES: &[&str] = &["extras-full.txt", "requirements-full.txt"];

/// Bootstrap configuration assembled from the global CLI flags.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Manifest location.
    pub manifest_path: PathBuf,
    /// Interpreter override handed to the probe.
    pub python: Option<PathBuf>,
    /// Fold output to plain ASCII.
    pub ascii: bool,
}

impl CliConfig {
    /// Build a config from the global flags, filling in defaults.
    ///
    /// Without an explicit `--manifest`, the first candidate file that
    /// exists in the working directory is used; if none exists the
    /// primary name is kept so error messages point somewhere useful.
    pub fn with_defaults(
        manifest: Option<PathBuf>,
        python: Option<PathBuf>,
        ascii: bool,
    ) -> Self {
        Self {
            manifest_path: manifest.unwrap_or_else(default_manifest_path),
            python,
            ascii,
        }
    }
}

fn default_manifest_path() -> PathBuf {
    for candidate in MANIFEST_CANDIDATES {
        let path = Path::new(candidate);
        if path.exists() {
            return path.to_path_buf();
        }
    }
    PathBuf::from(MANIFEST_CANDIDATES[0])
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Resolved configuration.
    config: CliConfig,
    /// Known optional capabilities.
    registry: ExtrasRegistry,
    /// Environment probe, live or stubbed.
    probe: Arc<dyn EnvironmentProbe>,
}

impl CliContext {
    /// Path of the manifest commands operate on.
    pub fn manifest_path(&self) -> &Path {
        &self.config.manifest_path
    }

    /// Whether output should be folded to ASCII.
    pub fn ascii(&self) -> bool {
        self.config.ascii
    }

    /// The capability registry.
    pub fn registry(&self) -> &ExtrasRegistry {
        &self.registry
    }

    /// The environment probe.
    pub fn probe(&self) -> &Arc<dyn EnvironmentProbe> {
        &self.probe
    }
}

/// Bootstrap the CLI with the live environment probe.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let mut probe = DefaultEnvironmentProbe::new();
    if let Some(python) = &config.python {
        probe = probe.with_python(python.clone());
    }
    debug!(manifest = %config.manifest_path.display(), "CLI context ready");
    CliContext {
        config,
        registry: ExtrasRegistry::builtin(),
        probe: Arc::new(probe),
    }
}

/// Bootstrap with a caller-supplied probe (for testing).
pub fn bootstrap_with(config: CliConfig, probe: Arc<dyn EnvironmentProbe>) -> CliContext {
    CliContext {
        config,
        registry: ExtrasRegistry::builtin(),
        probe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symkit_core::{InstalledPackage, MemoryReading, ProbeError};

    /// Probe stub that reports nothing installed.
    struct EmptyProbe;

    impl EnvironmentProbe for EmptyProbe {
        fn installed_packages(&self) -> Result<Vec<InstalledPackage>, ProbeError> {
            Ok(Vec::new())
        }

        fn find_backend(&self, _name: &str) -> Option<PathBuf> {
            None
        }

        fn memory_reading(&self) -> Option<MemoryReading> {
            None
        }
    }

    #[test]
    fn test_explicit_manifest_path_is_kept() {
        let config =
            CliConfig::with_defaults(Some(PathBuf::from("/tmp/custom.txt")), None, false);
        assert_eq!(config.manifest_path, PathBuf::from("/tmp/custom.txt"));
        assert!(!config.ascii);
    }

    #[test]
    fn test_default_manifest_path_is_a_candidate_name() {
        let config = CliConfig::with_defaults(None, None, false);
        let name = config
            .manifest_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap();
        assert!(MANIFEST_CANDIDATES.contains(&name));
    }

    #[test]
    fn test_bootstrap_with_injects_the_probe() {
        let config = CliConfig::with_defaults(Some(PathBuf::from("x.txt")), None, true);
        let ctx = bootstrap_with(config, Arc::new(EmptyProbe));
        assert!(ctx.ascii());
        assert_eq!(ctx.manifest_path(), Path::new("x.txt"));
        assert_eq!(ctx.registry().len(), ctx.registry().iter().count());
        assert!(ctx.probe().installed_packages().unwrap().is_empty());
    }

    #[test]
    fn test_bootstrap_builds_a_live_context() {
        let config = CliConfig::with_defaults(None, Some(PathBuf::from("/opt/python")), false);
        let ctx = bootstrap(config);
        assert!(!ctx.registry().is_empty());
    }
}
