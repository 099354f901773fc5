//! Lint command handler.
//!
//! Reports all manifest problems instead of failing on the first:
//! duplicate entries, constraint pairs no version satisfies, and
//! packages the capability registry does not know.

use std::path::Path;

use anyhow::Result;
use symkit_core::{LintFinding, Manifest};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::emit_line;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Execute the lint command.
///
/// `path` overrides the configured manifest; parse errors stay fatal
/// because nothing past the first bad line can be trusted.
pub async fn execute(ctx: &CliContext, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or_else(|| ctx.manifest_path());
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;

    let manifest = match Manifest::parse_str(&text) {
        Ok(manifest) => manifest,
        Err(error) => {
            emit_line(
                &format!("{}✗ {}: {}{}", RED, path.display(), error, RESET),
                ctx.ascii(),
            );
            return Err(CliError::from(error).into());
        }
    };

    let mut findings = manifest.lint();
    for entry in manifest.entries() {
        if ctx.registry().lookup(&entry.name).is_none() {
            findings.push(LintFinding::UnknownPackage {
                name: entry.normalized_name(),
                line: entry.line,
            });
        }
    }

    if findings.is_empty() {
        emit_line(
            &format!(
                "{}✓ {} OK: {} entry(s){}",
                GREEN,
                path.display(),
                manifest.len(),
                RESET
            ),
            ctx.ascii(),
        );
        return Ok(());
    }

    for finding in &findings {
        emit_line(&format!("{}! {}{}", YELLOW, finding, RESET), ctx.ascii());
    }
    anyhow::bail!("{} problem(s) in {}", findings.len(), path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use symkit_core::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};

    use crate::bootstrap::{CliConfig, bootstrap_with};

    /// Probe stub; lint never calls it.
    struct UnusedProbe;

    impl EnvironmentProbe for UnusedProbe {
        fn installed_packages(&self) -> Result<Vec<InstalledPackage>, ProbeError> {
            panic!("lint must not probe the environment");
        }

        fn find_backend(&self, _name: &str) -> Option<PathBuf> {
            panic!("lint must not probe the environment");
        }

        fn memory_reading(&self) -> Option<MemoryReading> {
            panic!("lint must not probe the environment");
        }
    }

    fn context_for(dir: &tempfile::TempDir, text: &str) -> (CliContext, PathBuf) {
        let path = dir.path().join("extras-full.txt");
        std::fs::write(&path, text).unwrap();
        let config = CliConfig::with_defaults(Some(path.clone()), None, true);
        (bootstrap_with(config, Arc::new(UnusedProbe)), path)
    }

    #[tokio::test]
    async fn test_clean_manifest_passes() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "# extras\nlxml >= 4.9\nwordcloud\n");
        execute(&ctx, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_entries_fail() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "lxml\nLxml >= 4.0\n");
        let err = execute(&ctx, None).await.unwrap_err();
        assert!(err.to_string().contains("1 problem(s)"));
    }

    #[tokio::test]
    async fn test_unknown_package_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "numpy >= 1.20\n");
        assert!(execute(&ctx, None).await.is_err());
    }

    #[tokio::test]
    async fn test_conflicting_constraints_fail() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "pyocr == 0.8, == 0.9\n");
        assert!(execute(&ctx, None).await.is_err());
    }

    #[tokio::test]
    async fn test_parse_error_maps_to_manifest_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "lxml\n>= 1.0\n");
        let err = execute(&ctx, None).await.unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), 65);
    }

    #[tokio::test]
    async fn test_explicit_path_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context_for(&dir, "lxml\n");
        let other = dir.path().join("other.txt");
        std::fs::write(&other, "unidecode\n").unwrap();
        execute(&ctx, Some(&other)).await.unwrap();
    }
}
