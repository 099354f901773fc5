//! Extras manifest model: parsing, canonical rendering, and linting.
//!
//! A manifest is a plain-text file with one package specifier per line.
//! Specifiers carry an optional version constraint, `#` starts a comment
//! (whole-line or trailing), and blank lines are ignored. Line order and
//! comments survive a parse/render round trip.

pub mod error;
mod parse;

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::iter::subsets;
use crate::text::interpolate;
use crate::version::{Version, VersionConstraint};

pub use error::ManifestError;

/// One manifest entry: a package with optional constraints and comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    /// Package name as written in the manifest.
    pub name: String,
    /// Constraint clauses, all of which must hold.
    pub constraints: Vec<VersionConstraint>,
    /// Trailing comment text, `#` and surrounding whitespace stripped.
    pub comment: Option<String>,
    /// 1-based source line.
    pub line: usize,
}

impl Requirement {
    /// Name folded to the canonical comparison form.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Whether `candidate` satisfies every constraint clause.
    pub fn matches_version(&self, candidate: &Version) -> bool {
        self.constraints.iter().all(|clause| clause.matches(candidate))
    }

    /// Joined constraint text (`">= 0.17"`), or None when unconstrained.
    pub fn constraint_text(&self) -> Option<String> {
        if self.constraints.is_empty() {
            return None;
        }
        Some(
            self.constraints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(constraints) = self.constraint_text() {
            write!(f, " {constraints}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, "  # {comment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Line {
    Blank,
    Comment(String),
    Entry(Requirement),
}

/// A parsed extras manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    lines: Vec<Line>,
}

impl Manifest {
    /// Parse manifest text, failing on the first invalid line.
    pub fn parse_str(text: &str) -> Result<Self, ManifestError> {
        let mut lines = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            lines.push(parse::parse_line(raw, index + 1)?);
        }
        let manifest = Self { lines };
        debug!(entries = manifest.len(), "parsed manifest");
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse_str(&text)
    }

    /// Entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &Requirement> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry(requirement) => Some(requirement),
            _ => None,
        })
    }

    /// Number of entries (not lines).
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// First entry whose normalized name matches `name`.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        let wanted = normalize_name(name);
        self.entries()
            .find(|entry| entry.normalized_name() == wanted)
    }

    /// Canonical manifest text: comments and blank lines reproduced,
    /// entries re-emitted with canonical spacing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Blank => {}
                Line::Comment(text) if text.is_empty() => out.push('#'),
                Line::Comment(text) => {
                    out.push_str("# ");
                    out.push_str(text);
                }
                Line::Entry(requirement) => out.push_str(&requirement.to_string()),
            }
            out.push('\n');
        }
        out
    }

    /// Non-fatal problems: duplicate entries and constraint pairs no
    /// version can satisfy. Registry-level checks live with the caller.
    pub fn lint(&self) -> Vec<LintFinding> {
        let mut findings = Vec::new();

        let mut seen: Vec<(String, usize)> = Vec::new();
        for entry in self.entries() {
            let normalized = entry.normalized_name();
            if let Some((_, first_line)) = seen.iter().find(|(name, _)| *name == normalized) {
                findings.push(LintFinding::DuplicateEntry {
                    name: normalized.clone(),
                    first_line: *first_line,
                    line: entry.line,
                });
            }
            seen.push((normalized, entry.line));
        }

        // Constraints on one package may be split across duplicate entries
        let mut grouped: Vec<(String, Vec<&VersionConstraint>)> = Vec::new();
        for entry in self.entries() {
            let normalized = entry.normalized_name();
            match grouped.iter_mut().find(|(name, _)| *name == normalized) {
                Some((_, constraints)) => constraints.extend(entry.constraints.iter()),
                None => grouped.push((normalized, entry.constraints.iter().collect())),
            }
        }
        for (name, constraints) in &grouped {
            for pair in subsets(constraints, 2, 2, false) {
                if pair[0].conflicts_with(pair[1]) {
                    findings.push(LintFinding::ConflictingConstraints {
                        name: name.clone(),
                        left: pair[0].to_string(),
                        right: pair[1].to_string(),
                    });
                }
            }
        }

        findings
    }
}

/// Fold a package name to its canonical comparison form: lowercase,
/// with every run of `-`, `_`, `.` collapsed to a single `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            pending_separator = !normalized.is_empty();
        } else {
            if pending_separator {
                normalized.push('-');
                pending_separator = false;
            }
            normalized.push(c.to_ascii_lowercase());
        }
    }
    normalized
}

/// A non-fatal problem found by [`Manifest::lint`] or the CLI's
/// registry pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    DuplicateEntry {
        name: String,
        first_line: usize,
        line: usize,
    },
    ConflictingConstraints {
        name: String,
        left: String,
        right: String,
    },
    UnknownPackage {
        name: String,
        line: usize,
    },
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry {
                name,
                first_line,
                line,
            } => f.write_str(&interpolate(
                "duplicate entry `1` on line `2` (first on line `3`)",
                &[name, &line.to_string(), &first_line.to_string()],
            )),
            Self::ConflictingConstraints { name, left, right } => f.write_str(&interpolate(
                "`1`: no version can satisfy both `2` and `3`",
                &[name, left, right],
            )),
            Self::UnknownPackage { name, line } => f.write_str(&interpolate(
                "line `2`: `1` is not a known optional capability",
                &[name, &line.to_string()],
            )),
        }
    }
}
