//! Package metadata scanning across interpreter import paths.
//!
//! Installed distributions leave a `Name-Version.dist-info` directory
//! (or the older `.egg-info`) next to their code. Scanning those stems
//! is enough to answer "what is installed, at which version" without
//! importing anything.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use symkit_core::{InstalledPackage, Version, normalize_name};
use tracing::{debug, trace};

const METADATA_SUFFIXES: &[&str] = &[".dist-info", ".egg-info"];

/// Scan import paths in order, keeping the first hit per package.
///
/// Earlier paths shadow later ones, mirroring how the interpreter itself
/// resolves imports.
pub fn scan_import_paths(paths: &[PathBuf]) -> Vec<InstalledPackage> {
    let mut found: BTreeMap<String, InstalledPackage> = BTreeMap::new();
    for path in paths {
        for package in scan_site_dir(path) {
            found.entry(package.name.clone()).or_insert(package);
        }
    }
    debug!(packages = found.len(), paths = paths.len(), "scanned import paths");
    found.into_values().collect()
}

/// Packages recorded in one directory. Unreadable directories read as
/// empty; import paths routinely list entries that do not exist.
pub fn scan_site_dir(dir: &Path) -> Vec<InstalledPackage> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut packages = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(package) = parse_metadata_stem(name) {
            trace!(package = %package.name, dir = %dir.display(), "metadata found");
            packages.push(package);
        }
    }
    packages
}

/// Split a metadata directory name into package name and version.
///
/// The stem is `Name-Version` with optional trailing tags, but the name
/// itself may contain dashes. The first dash-separated part that parses
/// as a version ends the name.
fn parse_metadata_stem(file_name: &str) -> Option<InstalledPackage> {
    let stem = METADATA_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))?;

    let parts: Vec<&str> = stem.split('-').collect();
    for i in 1..parts.len() {
        if let Ok(version) = parts[i].parse::<Version>() {
            let name = normalize_name(&parts[..i].join("-"));
            if name.is_empty() {
                return None;
            }
            return Some(InstalledPackage {
                name,
                version: Some(version),
            });
        }
    }

    let name = normalize_name(stem);
    if name.is_empty() {
        return None;
    }
    Some(InstalledPackage {
        name,
        version: None,
    })
}
