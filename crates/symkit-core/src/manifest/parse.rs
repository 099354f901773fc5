//! Line-level parsing for the extras manifest.

use crate::version::VersionConstraint;

use super::error::ManifestError;
use super::{Line, Requirement};

/// Parse one manifest line. `number` is 1-based.
pub(super) fn parse_line(raw: &str, number: usize) -> Result<Line, ManifestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if let Some(comment) = trimmed.strip_prefix('#') {
        return Ok(Line::Comment(comment.trim().to_string()));
    }

    // Names never contain '#', so the first one starts a trailing comment
    let (specifier, comment) = match trimmed.split_once('#') {
        Some((specifier, comment)) => (specifier.trim(), Some(comment.trim().to_string())),
        None => (trimmed, None),
    };

    let mut requirement = parse_specifier(specifier, number)?;
    requirement.comment = comment;
    Ok(Line::Entry(requirement))
}

fn parse_specifier(specifier: &str, number: usize) -> Result<Requirement, ManifestError> {
    let name_end = specifier
        .find(|c: char| !is_name_char(c))
        .unwrap_or(specifier.len());
    let name = &specifier[..name_end];

    if name.is_empty() {
        return Err(ManifestError::InvalidSpecifier {
            line: number,
            text: specifier.to_string(),
        });
    }
    if !has_valid_edges(name) {
        return Err(ManifestError::InvalidName {
            line: number,
            name: name.to_string(),
        });
    }

    let rest = specifier[name_end..].trim();
    let constraints = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',')
            .map(str::parse::<VersionConstraint>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ManifestError::InvalidConstraint {
                line: number,
                source,
            })?
    };

    Ok(Requirement {
        name: name.to_string(),
        constraints,
        comment: None,
        line: number,
    })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Names must start and end with a letter or digit.
fn has_valid_edges(name: &str) -> bool {
    let first_ok = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    let last_ok = name
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    first_ok && last_ok
}
