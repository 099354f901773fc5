//! Package versions and constraint clauses.
//!
//! Covers the subset of version syntax the extras manifest actually
//! uses: dotted numeric releases with an optional pre-release tag on the
//! final segment, and the seven comparison operators. Epochs, post- and
//! local-version segments are not modeled.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised while parsing versions or constraint clauses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version segment {segment:?} in {input:?}")]
    InvalidSegment { input: String, segment: String },

    #[error("unknown constraint operator in {0:?}")]
    UnknownOperator(String),

    #[error("constraint {0:?} is missing a version")]
    MissingVersion(String),

    #[error("compatible-release constraint needs at least two segments, got ~= {0}")]
    CompatibleTooShort(String),
}

/// A dotted release version such as `0.17`, `1.2.3`, or `2.0rc1`.
///
/// Trailing zero segments do not affect comparison: `1.0` equals
/// `1.0.0`. A pre-release tag sorts before the plain release it tags.
#[derive(Debug, Clone)]
pub struct Version {
    release: Vec<u64>,
    pre: Option<String>,
}

impl Version {
    /// Numeric release segments as parsed.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Whether the version carries a pre-release tag (`1.0rc1`).
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// True when the release segments agree with `prefix`, treating
    /// missing segments as zero.
    fn release_starts_with(&self, prefix: &[u64]) -> bool {
        prefix
            .iter()
            .enumerate()
            .all(|(index, part)| self.release.get(index).copied().unwrap_or(0) == *part)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let invalid = |segment: &str| VersionError::InvalidSegment {
            input: trimmed.to_string(),
            segment: segment.to_string(),
        };

        let segments: Vec<&str> = trimmed.split('.').collect();
        let last = segments.len() - 1;
        let mut release = Vec::with_capacity(segments.len());
        let mut pre = None;

        for (index, segment) in segments.iter().enumerate() {
            let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                return Err(invalid(segment));
            }
            let value: u64 = digits.parse().map_err(|_| invalid(segment))?;
            release.push(value);

            let rest = &segment[digits.len()..];
            if !rest.is_empty() {
                // A pre-release tag may only ride on the final segment
                if index != last {
                    return Err(invalid(segment));
                }
                pre = Some(rest.to_string());
            }
        }

        Ok(Self { release, pre })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, part) in self.release.iter().enumerate() {
            if index > 0 {
                write!(f, ".")?;
            }
            write!(f, "{part}")?;
        }
        if let Some(pre) = &self.pre {
            write!(f, "{pre}")?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let segments = self.release.len().max(other.release.len());
        for index in 0..segments {
            let left = self.release.get(index).copied().unwrap_or(0);
            let right = other.release.get(index).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(left), Some(right)) => left.cmp(right),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Comparison operator of a constraint clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
    Compatible,
}

impl ConstraintOp {
    /// The operator as written in a manifest.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Compatible => "~=",
        }
    }
}

// Two-character tokens first so ">=" never parses as ">" + "=0.17"
const OPERATOR_TOKENS: &[(&str, ConstraintOp)] = &[
    ("==", ConstraintOp::Eq),
    ("!=", ConstraintOp::Ne),
    (">=", ConstraintOp::Ge),
    ("<=", ConstraintOp::Le),
    ("~=", ConstraintOp::Compatible),
    (">", ConstraintOp::Gt),
    ("<", ConstraintOp::Lt),
];

/// One constraint clause, e.g. `>= 0.17`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub op: ConstraintOp,
    pub version: Version,
}

impl FromStr for VersionConstraint {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parsed = None;
        for (token, op) in OPERATOR_TOKENS.iter().copied() {
            if let Some(rest) = trimmed.strip_prefix(token) {
                parsed = Some((op, rest.trim()));
                break;
            }
        }
        let Some((op, rest)) = parsed else {
            return Err(VersionError::UnknownOperator(trimmed.to_string()));
        };
        if rest.is_empty() {
            return Err(VersionError::MissingVersion(trimmed.to_string()));
        }

        let version: Version = rest.parse()?;
        if op == ConstraintOp::Compatible && version.release().len() < 2 {
            return Err(VersionError::CompatibleTooShort(version.to_string()));
        }
        Ok(Self { op, version })
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op.token(), self.version)
    }
}

impl VersionConstraint {
    /// Whether `candidate` satisfies this clause.
    ///
    /// `~= X.Y` accepts anything at least `X.Y` whose release shares the
    /// prefix `X`, per compatible-release semantics.
    pub fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            ConstraintOp::Eq => candidate == &self.version,
            ConstraintOp::Ne => candidate != &self.version,
            ConstraintOp::Ge => candidate >= &self.version,
            ConstraintOp::Le => candidate <= &self.version,
            ConstraintOp::Gt => candidate > &self.version,
            ConstraintOp::Lt => candidate < &self.version,
            ConstraintOp::Compatible => {
                let release = self.version.release();
                if release.len() < 2 {
                    return candidate >= &self.version;
                }
                candidate >= &self.version
                    && candidate.release_starts_with(&release[..release.len() - 1])
            }
        }
    }

    /// Whether no version can satisfy both clauses.
    ///
    /// The check is conservative: it reports only definite conflicts
    /// (disjoint bounds, incompatible pins, a pin against an exclusion
    /// of the same version).
    pub fn conflicts_with(&self, other: &Self) -> bool {
        match (self.op, other.op) {
            (ConstraintOp::Eq, _) => !other.matches(&self.version),
            (_, ConstraintOp::Eq) => !self.matches(&other.version),
            (ConstraintOp::Ne, _) | (_, ConstraintOp::Ne) => false,
            _ => {
                let (self_lower, self_upper) = self.bounds();
                let (other_lower, other_upper) = other.bounds();
                bounds_disjoint(self_lower.as_ref(), other_upper.as_ref())
                    || bounds_disjoint(other_lower.as_ref(), self_upper.as_ref())
            }
        }
    }

    /// Lower and upper interval bounds implied by a range-style clause.
    /// The flag marks a strict (exclusive) bound.
    fn bounds(&self) -> (Option<(Version, bool)>, Option<(Version, bool)>) {
        match self.op {
            ConstraintOp::Ge => (Some((self.version.clone(), false)), None),
            ConstraintOp::Gt => (Some((self.version.clone(), true)), None),
            ConstraintOp::Le => (None, Some((self.version.clone(), false))),
            ConstraintOp::Lt => (None, Some((self.version.clone(), true))),
            ConstraintOp::Compatible => {
                let release = self.version.release();
                let upper = if release.len() < 2 {
                    None
                } else {
                    let mut bumped = release[..release.len() - 1].to_vec();
                    if let Some(last) = bumped.last_mut() {
                        *last += 1;
                    }
                    Some((
                        Version {
                            release: bumped,
                            pre: None,
                        },
                        true,
                    ))
                };
                (Some((self.version.clone(), false)), upper)
            }
            // Handled before bounds() is consulted
            ConstraintOp::Eq | ConstraintOp::Ne => (None, None),
        }
    }
}

fn bounds_disjoint(lower: Option<&(Version, bool)>, upper: Option<&(Version, bool)>) -> bool {
    match (lower, upper) {
        (Some((low, low_strict)), Some((high, high_strict))) => match low.cmp(high) {
            Ordering::Greater => true,
            Ordering::Equal => *low_strict || *high_strict,
            Ordering::Less => false,
        },
        _ => false,
    }
}
