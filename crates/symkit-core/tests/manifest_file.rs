//! Integration tests for the shipped extras manifest.
//!
//! The repository ships `extras-full.txt` listing every optional
//! capability. These tests pin its shape: every non-blank line is a
//! comment or a valid specifier, parsing is idempotent, and the entry
//! set matches the extras registry.

use std::fs;

use symkit_core::{ConstraintOp, ExtrasRegistry, Manifest, ManifestError};

const EXTRAS_FULL: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../extras-full.txt"));

#[test]
fn test_shipped_manifest_parses() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    assert_eq!(manifest.len(), 7);
}

#[test]
fn test_shipped_manifest_entry_names_in_order() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    let names: Vec<String> = manifest
        .entries()
        .map(symkit_core::Requirement::normalized_name)
        .collect();
    assert_eq!(
        names,
        [
            "ipywidgets",
            "lxml",
            "psutil",
            "pyocr",
            "scikit-image",
            "unidecode",
            "wordcloud",
        ]
    );
}

#[test]
fn test_shipped_manifest_line_shape() {
    // 9 physical lines: 2 header comments + 7 specifiers
    assert_eq!(EXTRAS_FULL.lines().count(), 9);
    let comments = EXTRAS_FULL
        .lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .count();
    assert_eq!(comments, 2);
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    assert_eq!(manifest.len() + comments, 9);
}

#[test]
fn test_only_scikit_image_carries_a_constraint() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    for entry in manifest.entries() {
        if entry.normalized_name() == "scikit-image" {
            assert_eq!(entry.constraints.len(), 1);
            assert_eq!(entry.constraints[0].op, ConstraintOp::Ge);
            assert_eq!(entry.constraints[0].version, "0.17".parse().unwrap());
        } else {
            assert!(entry.constraints.is_empty(), "{} is unconstrained", entry.name);
        }
    }
}

#[test]
fn test_every_entry_has_a_comment_naming_its_symbols() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    for entry in manifest.entries() {
        assert!(entry.comment.is_some(), "{} lacks a comment", entry.name);
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let first = Manifest::parse_str(EXTRAS_FULL).unwrap();
    let second = Manifest::parse_str(&first.render()).unwrap();
    assert_eq!(second, first);
    assert_eq!(second.render(), first.render());
}

#[test]
fn test_crlf_line_endings_parse_identically() {
    let crlf = EXTRAS_FULL.replace('\n', "\r\n");
    let manifest = Manifest::parse_str(&crlf).unwrap();
    assert_eq!(manifest, Manifest::parse_str(EXTRAS_FULL).unwrap());
}

#[test]
fn test_every_entry_is_a_known_capability() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    let registry = ExtrasRegistry::builtin();
    for entry in manifest.entries() {
        assert!(
            registry.lookup(&entry.name).is_some(),
            "{} is not in the registry",
            entry.name
        );
    }
    assert_eq!(manifest.len(), registry.len());
}

#[test]
fn test_shipped_manifest_is_lint_clean() {
    let manifest = Manifest::parse_str(EXTRAS_FULL).unwrap();
    assert!(manifest.lint().is_empty());
}

#[test]
fn test_from_path_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extras-full.txt");
    fs::write(&path, EXTRAS_FULL).unwrap();

    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest, Manifest::parse_str(EXTRAS_FULL).unwrap());

    let missing = dir.path().join("no-such-file.txt");
    match Manifest::from_path(&missing) {
        Err(ManifestError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected a read error, got {other:?}"),
    }
}
