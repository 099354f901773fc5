//! Registry of the optional capabilities the environment knows about.
//!
//! Each [`Extra`] ties a Python package to the feature it unlocks and the
//! builtin symbols that start working once it is installed. The registry
//! is the lookup side of the extras manifest: the manifest says what the
//! environment *wants*, the registry says what each entry *means*.

mod registry;

use serde::Serialize;

use crate::manifest::normalize_name;

/// One optional capability: a package and what installing it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extra {
    /// Canonical package name (already normalized).
    pub package: &'static str,
    /// Short feature slug, e.g. `interactive-manipulation`.
    pub feature: &'static str,
    /// One-line description. May contain `\[Name]` escapes.
    pub summary: &'static str,
    /// Builtin symbols enabled by the package.
    pub unlocks: &'static [&'static str],
    /// External engine binaries the package drives, if any.
    pub backends: &'static [&'static str],
}

impl Extra {
    /// Whether this capability also needs an external engine on PATH.
    pub fn needs_backend(&self) -> bool {
        !self.backends.is_empty()
    }
}

/// The set of known optional capabilities.
#[derive(Debug, Clone)]
pub struct ExtrasRegistry {
    extras: &'static [Extra],
}

impl ExtrasRegistry {
    /// The built-in registry.
    pub fn builtin() -> Self {
        Self {
            extras: registry::BUILTIN,
        }
    }

    /// Look up a capability by package name, normalizing first.
    pub fn lookup(&self, name: &str) -> Option<&Extra> {
        let wanted = normalize_name(name);
        self.extras.iter().find(|extra| extra.package == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extra> {
        self.extras.iter()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }
}

impl Default for ExtrasRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_seven_capabilities() {
        assert_eq!(ExtrasRegistry::builtin().len(), 7);
    }

    #[test]
    fn test_lookup_normalizes_names() {
        let registry = ExtrasRegistry::builtin();
        let extra = registry.lookup("Scikit_Image").unwrap();
        assert_eq!(extra.package, "scikit-image");
        assert_eq!(extra.feature, "image-processing");
        assert!(registry.lookup("numpy").is_none());
    }

    #[test]
    fn test_registry_names_are_already_normalized() {
        for extra in ExtrasRegistry::builtin().iter() {
            assert_eq!(normalize_name(extra.package), extra.package);
        }
    }

    #[test]
    fn test_only_pyocr_needs_an_engine() {
        let registry = ExtrasRegistry::builtin();
        let with_backends: Vec<&str> = registry
            .iter()
            .filter(|extra| extra.needs_backend())
            .map(|extra| extra.package)
            .collect();
        assert_eq!(with_backends, ["pyocr"]);
        let pyocr = registry.lookup("pyocr").unwrap();
        assert_eq!(pyocr.backends, ["tesseract", "cuneiform"]);
    }

    #[test]
    fn test_every_capability_unlocks_something() {
        for extra in ExtrasRegistry::builtin().iter() {
            assert!(!extra.unlocks.is_empty(), "{} unlocks nothing", extra.package);
        }
    }
}
