//! End-to-end handler tests against the shipped manifest.
//!
//! These run every subcommand the way `main` dispatches them, with a
//! stub probe standing in for the machine.

use std::path::PathBuf;
use std::sync::Arc;

use symkit_cli::{CliConfig, bootstrap_with, handlers};
use symkit_core::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};

const EXTRAS_FULL: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../extras-full.txt"));

/// Probe stub with a fixed environment.
struct StaticProbe {
    packages: Vec<InstalledPackage>,
    memory: Option<MemoryReading>,
}

impl StaticProbe {
    fn empty() -> Self {
        Self {
            packages: Vec::new(),
            memory: None,
        }
    }

    fn with_everything() -> Self {
        let versions = [
            ("ipywidgets", "8.1.5"),
            ("lxml", "5.3.0"),
            ("psutil", "6.1.0"),
            ("pyocr", "0.8.5"),
            ("scikit-image", "0.24.0"),
            ("unidecode", "1.3.8"),
            ("wordcloud", "1.9.4"),
        ];
        Self {
            packages: versions
                .iter()
                .map(|(name, version)| InstalledPackage {
                    name: (*name).to_string(),
                    version: version.parse().ok(),
                })
                .collect(),
            memory: Some(MemoryReading {
                total_bytes: 16 * 1024 * 1024 * 1024,
                available_bytes: 8 * 1024 * 1024 * 1024,
            }),
        }
    }
}

impl EnvironmentProbe for StaticProbe {
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>, ProbeError> {
        Ok(self.packages.clone())
    }

    fn find_backend(&self, name: &str) -> Option<PathBuf> {
        (name == "tesseract").then(|| PathBuf::from("/usr/bin/tesseract"))
    }

    fn memory_reading(&self) -> Option<MemoryReading> {
        self.memory
    }
}

fn shipped_manifest(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("extras-full.txt");
    std::fs::write(&path, EXTRAS_FULL).unwrap();
    path
}

fn context(manifest: PathBuf, probe: StaticProbe) -> symkit_cli::CliContext {
    let config = CliConfig::with_defaults(Some(manifest), None, false);
    bootstrap_with(config, Arc::new(probe))
}

#[tokio::test]
async fn test_check_strict_passes_on_a_complete_environment() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::with_everything());
    handlers::check::execute(&ctx, true, false).await.unwrap();
}

#[tokio::test]
async fn test_check_strict_fails_on_an_empty_environment() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::empty());
    let err = handlers::check::execute(&ctx, true, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("7 of 7"));
}

#[tokio::test]
async fn test_check_json_runs_on_the_shipped_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::with_everything());
    handlers::check::execute(&ctx, false, true).await.unwrap();
}

#[tokio::test]
async fn test_list_runs_on_the_shipped_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::empty());
    handlers::list::execute(&ctx, false).await.unwrap();
    handlers::list::execute(&ctx, true).await.unwrap();
}

#[tokio::test]
async fn test_lint_accepts_the_shipped_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::empty());
    handlers::lint::execute(&ctx, None).await.unwrap();
}

#[tokio::test]
async fn test_lint_rejects_a_broken_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::empty());
    let broken = dir.path().join("broken.txt");
    std::fs::write(&broken, "lxml\nlxml == 1, == 2\nnumpy\n").unwrap();
    let err = handlers::lint::execute(&ctx, Some(&broken))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("3 problem(s)"));
}

#[test]
fn test_extras_describes_every_capability() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(shipped_manifest(&dir), StaticProbe::empty());
    handlers::extras::execute(&ctx).unwrap();
}
