#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod extras;
pub mod iter;
pub mod manifest;
pub mod ports;
pub mod report;
pub mod text;
pub mod version;

// Re-export commonly used types for convenience
pub use extras::{Extra, ExtrasRegistry};
pub use manifest::{LintFinding, Manifest, ManifestError, Requirement, normalize_name};
pub use ports::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};
pub use report::{
    BackendStatus, CapabilityReport, EntryReport, EntryStatus, SelectedBackend, build_report,
};
pub use version::{ConstraintOp, Version, VersionConstraint, VersionError};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
