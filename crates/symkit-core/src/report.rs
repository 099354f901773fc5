//! Capability report: manifest entries resolved against a probed environment.
//!
//! [`build_report`] joins three inputs: the extras manifest (what the
//! environment wants), the registry (what each entry unlocks), and an
//! [`EnvironmentProbe`] (what is actually installed). The result is one
//! [`EntryReport`] per manifest entry plus an optional memory reading.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::extras::ExtrasRegistry;
use crate::manifest::{Manifest, Requirement};
use crate::ports::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};
use crate::text::interpolate;
use crate::version::Version;

const MSG_PRESENT_CONSTRAINED: &str = "installed `1`, satisfies `2`";
const MSG_PRESENT: &str = "installed `1`";
const MSG_PRESENT_UNVERSIONED: &str = "installed, version not recorded";
const MSG_OUTDATED: &str = "installed `1`, needs `2`";
const MSG_MISSING_FEATURE: &str = "not installed, `1` disabled";
const MSG_MISSING: &str = "not installed";

/// Resolution of one manifest entry against the environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryStatus {
    /// Installed and satisfying every constraint. The version is absent
    /// when the installed metadata does not record one.
    Present { version: Option<Version> },
    /// Installed, but the recorded version fails a constraint.
    Outdated { installed: Version },
    /// Not installed at all.
    Missing,
}

/// The engine binary chosen for a backend-driven capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedBackend {
    pub name: String,
    pub path: std::path::PathBuf,
}

/// PATH search outcome for a capability that needs an external engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    /// First candidate found on PATH, if any.
    pub selected: Option<SelectedBackend>,
    /// All candidate engine names, in preference order.
    pub candidates: Vec<String>,
}

/// One manifest entry resolved against the environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryReport {
    /// Normalized package name.
    pub package: String,
    /// Constraint text from the manifest, if any.
    pub constraint: Option<String>,
    /// Feature slug from the registry, if the package is known.
    pub feature: Option<String>,
    pub status: EntryStatus,
    /// Engine search outcome, for capabilities that need one.
    pub backend: Option<BackendStatus>,
    /// Human-readable one-liner for the status.
    pub detail: String,
}

/// Full capability report for one environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<EntryReport>,
    pub memory: Option<MemoryReading>,
}

impl CapabilityReport {
    pub fn present(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Present { .. }))
    }

    pub fn outdated(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Outdated { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Missing))
    }

    /// Whether every manifest entry resolved to Present.
    pub fn is_complete(&self) -> bool {
        self.present() == self.entries.len()
    }

    fn count(&self, predicate: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.status))
            .count()
    }
}

/// Resolve every manifest entry against the probed environment.
pub fn build_report(
    manifest: &Manifest,
    registry: &ExtrasRegistry,
    probe: &dyn EnvironmentProbe,
) -> Result<CapabilityReport, ProbeError> {
    let mut installed: HashMap<String, InstalledPackage> = HashMap::new();
    for package in probe.installed_packages()? {
        installed.entry(package.name.clone()).or_insert(package);
    }

    let entries: Vec<EntryReport> = manifest
        .entries()
        .map(|requirement| resolve_entry(requirement, registry, &installed, probe))
        .collect();

    let report = CapabilityReport {
        generated_at: Utc::now(),
        entries,
        memory: probe.memory_reading(),
    };
    debug!(
        present = report.present(),
        missing = report.missing(),
        outdated = report.outdated(),
        "capability report built"
    );
    Ok(report)
}

fn resolve_entry(
    requirement: &Requirement,
    registry: &ExtrasRegistry,
    installed: &HashMap<String, InstalledPackage>,
    probe: &dyn EnvironmentProbe,
) -> EntryReport {
    let package = requirement.normalized_name();
    let constraint = requirement.constraint_text();
    let extra = registry.lookup(&package);
    let feature = extra.map(|extra| extra.feature.to_string());

    let status = match installed.get(&package) {
        None => EntryStatus::Missing,
        Some(found) => match &found.version {
            None => EntryStatus::Present { version: None },
            Some(version) if requirement.matches_version(version) => EntryStatus::Present {
                version: Some(version.clone()),
            },
            Some(version) => EntryStatus::Outdated {
                installed: version.clone(),
            },
        },
    };

    let backend = extra
        .filter(|extra| extra.needs_backend())
        .map(|extra| backend_status(extra.backends, probe));

    let detail = detail_for(&status, constraint.as_deref(), feature.as_deref());

    EntryReport {
        package,
        constraint,
        feature,
        status,
        backend,
        detail,
    }
}

fn backend_status(candidates: &[&str], probe: &dyn EnvironmentProbe) -> BackendStatus {
    let selected = candidates.iter().find_map(|name| {
        probe.find_backend(name).map(|path| SelectedBackend {
            name: (*name).to_string(),
            path,
        })
    });
    BackendStatus {
        selected,
        candidates: candidates.iter().map(|name| (*name).to_string()).collect(),
    }
}

fn detail_for(status: &EntryStatus, constraint: Option<&str>, feature: Option<&str>) -> String {
    match status {
        EntryStatus::Present {
            version: Some(version),
        } => match constraint {
            Some(constraint) => interpolate(
                MSG_PRESENT_CONSTRAINED,
                &[&version.to_string(), constraint],
            ),
            None => interpolate(MSG_PRESENT, &[&version.to_string()]),
        },
        EntryStatus::Present { version: None } => MSG_PRESENT_UNVERSIONED.to_string(),
        EntryStatus::Outdated { installed } => interpolate(
            MSG_OUTDATED,
            &[&installed.to_string(), constraint.unwrap_or("?")],
        ),
        EntryStatus::Missing => match feature {
            Some(feature) => interpolate(MSG_MISSING_FEATURE, &[feature]),
            None => MSG_MISSING.to_string(),
        },
    }
}
