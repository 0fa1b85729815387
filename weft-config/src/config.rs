//! Configuration types for the weft build step.
//!
//! Split into the on-disk record ([`BuildConfig`] and its nested sections,
//! mirroring the generator's file shape field by field) and [`CheckOptions`]
//! (how a loaded record is checked). The record itself carries no behavior:
//! it is constructed once at load time and immutable for the build.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Well-known configuration file names, probed in order.
pub const WELL_KNOWN_NAMES: &[&str] =
    &["weft.config.json", "weft.config.yaml", "weft.config.yml"];

/// CSS generic family keywords accepted as the final entry of a fallback chain.
pub const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Font-role overrides: role name → ordered fallback chain.
///
/// A `BTreeMap` keeps iteration (and therefore emit) deterministic, so
/// loading the same file twice yields structurally equal records.
pub type FontFamilyMap = BTreeMap<String, Vec<String>>;

/// The build configuration record the generator consumes.
///
/// Unknown fields are rejected at parse time: the record is flat and closed,
/// and a typo like `contents` must surface as a load error rather than
/// silently configure nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Glob patterns naming the template files the generator scans for
    /// class usage. Order is preserved verbatim; it may matter to the
    /// generator's scan priority but carries no meaning here.
    pub content: Vec<String>,
    /// Design-token overrides. Absent in the file means no overrides.
    #[serde(default)]
    pub theme: Theme,
}

/// Design-token section. Only additive overrides exist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Tokens merged additively into the generator's base token set —
    /// the `extend` nesting is what signals non-destructive merging.
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// Additive token overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtend {
    /// Font-role name → fallback chain, e.g. `serif: ["PT Serif", "serif"]`.
    /// Each chain needs at least one family and conventionally ends with a
    /// generic keyword.
    #[serde(rename = "fontFamily", default)]
    pub font_family: FontFamilyMap,
}

impl Default for BuildConfig {
    /// The record shipped with the toolchain: templates under
    /// `./templates/`, three serif font roles.
    fn default() -> Self {
        let mut font_family = FontFamilyMap::new();
        font_family.insert(
            "cloister".to_owned(),
            vec!["Cloister".to_owned(), "serif".to_owned()],
        );
        font_family.insert(
            "serif".to_owned(),
            vec!["PT Serif".to_owned(), "serif".to_owned()],
        );
        font_family.insert(
            "yinit".to_owned(),
            vec!["Yinit".to_owned(), "serif".to_owned()],
        );
        Self {
            content: vec!["./templates/**/*.html".to_owned()],
            theme: Theme {
                extend: ThemeExtend { font_family },
            },
        }
    }
}

/// Controls how a loaded record is checked.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckOptions {
    /// Base directory content patterns are resolved against when counting
    /// template matches. Defaults to the configuration file's directory.
    pub base_dir: Option<PathBuf>,
    /// Count the template files each content pattern matches and warn on
    /// patterns that match nothing. Only the directory tree is inspected;
    /// file contents are never read.
    pub scan_templates: bool,
    /// Promote warnings to errors (CI usage).
    pub strict: bool,
    /// Maximum directory traversal depth for the template walk (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum number of files visited by the template walk (default: `100_000`).
    /// Prevents runaway walks on pathological directory trees.
    pub max_files: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            scan_templates: true,
            strict: false,
            max_depth: 64,
            max_files: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_content() {
        let config = BuildConfig::default();
        assert_eq!(config.content, vec!["./templates/**/*.html".to_owned()]);
    }

    #[test]
    fn test_default_record_font_roles_distinct() {
        let config = BuildConfig::default();
        let roles = &config.theme.extend.font_family;
        assert_eq!(roles.len(), 3);
        assert_eq!(
            roles["serif"],
            vec!["PT Serif".to_owned(), "serif".to_owned()]
        );
        assert_eq!(
            roles["yinit"],
            vec!["Yinit".to_owned(), "serif".to_owned()]
        );
        assert_eq!(
            roles["cloister"],
            vec!["Cloister".to_owned(), "serif".to_owned()]
        );
    }

    #[test]
    fn test_default_chains_end_with_generic_family() {
        let config = BuildConfig::default();
        for chain in config.theme.extend.font_family.values() {
            let last = chain.last().map(String::as_str);
            assert!(last.is_some_and(|l| GENERIC_FAMILIES.contains(&l)));
        }
    }
}
