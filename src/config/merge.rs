//! Merging the built-in table with project extensions and exclusions.
//!
//! [`merge_cleanup_paths`] is a pure function from three input tables to one
//! output table. It never touches the filesystem, which keeps every merge rule
//! testable in isolation.
//!
//! # Merge rules
//!
//! 1. Every package key is lower-cased.
//! 2. Extension paths are appended after the defaults of the same package,
//!    skipping paths already present; unknown packages are added wholesale.
//! 3. Path-level ignores remove single paths from a package's set.
//! 4. Package-level ignores drop the package regardless of defaults or extensions.
//! 5. Packages left with no paths are dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

use super::project::IgnoreConfig;
use crate::core::{HardenError, PackageName};

/// The merged package → cleanup paths table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupConfig {
    packages: BTreeMap<PackageName, Vec<String>>,
}

impl CleanupConfig {
    /// Paths configured for `name`, compared case-insensitively.
    ///
    /// Returns an empty slice for packages without configuration, which is the
    /// common case.
    #[must_use]
    pub fn resolve_paths(&self, name: impl AsRef<str>) -> &[String] {
        self.paths_for(&PackageName::new(name))
    }

    /// Paths configured for an already normalised name.
    #[must_use]
    pub fn paths_for(&self, name: &PackageName) -> &[String] {
        self.packages.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether `name` has at least one configured path.
    #[must_use]
    pub fn contains(&self, name: &PackageName) -> bool {
        self.packages.contains_key(name)
    }

    /// Configured packages in ascending order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.packages.keys()
    }

    /// Configured packages with their paths, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[String])> {
        self.packages.iter().map(|(name, paths)| (name, paths.as_slice()))
    }

    /// Number of configured packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether no package is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Merge defaults, extensions and ignores into one table.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use vendor_harden_cli::config::{IgnoreConfig, merge_cleanup_paths};
///
/// let defaults = BTreeMap::from([("acme/lib".to_string(), vec!["tests".into(), "docs".into()])]);
/// let extend = BTreeMap::from([("Acme/Lib".to_string(), vec!["examples".into()])]);
/// let ignore = IgnoreConfig {
///     packages: vec![],
///     paths: BTreeMap::from([("acme/lib".to_string(), vec!["docs".into()])]),
/// };
///
/// let merged = merge_cleanup_paths(&defaults, &extend, &ignore);
/// assert_eq!(merged.resolve_paths("acme/lib"), ["tests", "examples"]);
/// ```
#[must_use]
pub fn merge_cleanup_paths(
    defaults: &BTreeMap<String, Vec<String>>,
    extend: &BTreeMap<String, Vec<String>>,
    ignore: &IgnoreConfig,
) -> CleanupConfig {
    let mut packages: BTreeMap<PackageName, Vec<String>> = BTreeMap::new();

    for (name, paths) in defaults.iter().chain(extend.iter()) {
        let entry = packages.entry(PackageName::new(name)).or_default();
        for path in paths {
            let path = normalize_relative(path);
            if !path.is_empty() && !entry.contains(&path) {
                entry.push(path);
            }
        }
    }

    let mut ignored_paths: BTreeMap<PackageName, BTreeSet<String>> = BTreeMap::new();
    for (name, paths) in &ignore.paths {
        ignored_paths
            .entry(PackageName::new(name))
            .or_default()
            .extend(paths.iter().map(|path| normalize_relative(path)));
    }

    for (name, ignored) in &ignored_paths {
        if let Some(paths) = packages.get_mut(name) {
            paths.retain(|path| !ignored.contains(path));
        }
    }

    for name in &ignore.packages {
        packages.remove(&PackageName::new(name));
    }

    packages.retain(|_, paths| !paths.is_empty());

    CleanupConfig {
        packages,
    }
}

/// Canonical textual form of a relative cleanup path.
///
/// Trims whitespace, `.` components and trailing separators so that
/// `"./tests/"`, `"tests/."` and `"tests"` compare equal.
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    let path = path.trim();
    let rooted = path.starts_with(['/', '\\']);
    let joined = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    if rooted {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Reject cleanup paths that would leave the package directory.
///
/// # Errors
///
/// Returns [`HardenError::InvalidCleanupPath`] for empty paths, paths that
/// resolve to the package root, absolute paths and paths containing a `..`
/// component.
pub fn validate_cleanup_path(package: &str, path: &str) -> Result<(), HardenError> {
    let invalid = |reason: &str| HardenError::InvalidCleanupPath {
        package: package.to_string(),
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    let normalized = normalize_relative(path);

    if normalized.starts_with('/') {
        return Err(invalid("path must be relative"));
    }

    for component in Path::new(&normalized).components() {
        match component {
            Component::ParentDir => return Err(invalid("path contains '..'")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative"));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    if !Path::new(&normalized).components().any(|c| matches!(c, Component::Normal(_))) {
        return Err(invalid("path resolves to the package directory"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, paths)| {
                ((*name).to_string(), paths.iter().map(|p| (*p).to_string()).collect())
            })
            .collect()
    }

    fn sorted(paths: &[String]) -> Vec<String> {
        let mut paths = paths.to_vec();
        paths.sort();
        paths
    }

    #[test]
    fn test_extend_and_ignore_path() {
        let defaults = table(&[("acme/lib", &["tests", "docs"])]);
        let extend = table(&[("acme/lib", &["examples"])]);
        let ignore = IgnoreConfig {
            packages: vec![],
            paths: table(&[("acme/lib", &["docs"])]),
        };

        let merged = merge_cleanup_paths(&defaults, &extend, &ignore);
        assert_eq!(sorted(merged.resolve_paths("acme/lib")), vec!["examples", "tests"]);
    }

    #[test]
    fn test_ignore_package_wins_over_defaults_and_extensions() {
        let defaults = table(&[("acme/lib", &["tests"])]);
        let extend = table(&[("acme/lib", &["examples"])]);
        let ignore = IgnoreConfig {
            packages: vec!["ACME/Lib".to_string()],
            paths: BTreeMap::new(),
        };

        let merged = merge_cleanup_paths(&defaults, &extend, &ignore);
        assert!(merged.resolve_paths("acme/lib").is_empty());
        assert!(!merged.contains(&PackageName::new("acme/lib")));
    }

    #[test]
    fn test_extension_adds_new_package() {
        let merged = merge_cleanup_paths(
            &BTreeMap::new(),
            &table(&[("Other/Pkg", &["fixtures"])]),
            &IgnoreConfig::default(),
        );
        assert_eq!(merged.resolve_paths("other/pkg"), ["fixtures"]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_extension_does_not_duplicate_defaults() {
        let merged = merge_cleanup_paths(
            &table(&[("acme/lib", &["tests"])]),
            &table(&[("acme/lib", &["./tests/", "docs"])]),
            &IgnoreConfig::default(),
        );
        assert_eq!(merged.resolve_paths("acme/lib"), ["tests", "docs"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let merged = merge_cleanup_paths(
            &table(&[("acme/lib", &["tests"])]),
            &BTreeMap::new(),
            &IgnoreConfig::default(),
        );
        assert_eq!(merged.resolve_paths("ACME/LIB"), ["tests"]);
    }

    #[test]
    fn test_miss_returns_empty_slice() {
        let merged = CleanupConfig::default();
        assert!(merged.resolve_paths("nobody/nothing").is_empty());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_package_emptied_by_path_ignores_is_dropped() {
        let merged = merge_cleanup_paths(
            &table(&[("acme/lib", &["tests"])]),
            &BTreeMap::new(),
            &IgnoreConfig {
                packages: vec![],
                paths: table(&[("Acme/Lib", &["tests/"])]),
            },
        );
        assert!(merged.is_empty());
    }

    #[test]
    fn test_packages_are_ordered() {
        let merged = merge_cleanup_paths(
            &table(&[("b/b", &["t"]), ("a/a", &["t"])]),
            &table(&[("C/c", &["t"])]),
            &IgnoreConfig::default(),
        );
        let names: Vec<&str> = merged.packages().map(PackageName::as_str).collect();
        assert_eq!(names, vec!["a/a", "b/b", "c/c"]);
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_relative("./tests/"), "tests");
        assert_eq!(normalize_relative(" docs "), "docs");
        assert_eq!(normalize_relative("src/test"), "src/test");
        assert_eq!(normalize_relative("./"), "");
        assert_eq!(normalize_relative("tests/."), "tests");
        assert_eq!(normalize_relative("./src/./Tests"), "src/Tests");
        assert_eq!(normalize_relative("."), "");
    }

    #[test]
    fn test_merge_drops_package_root_entries() {
        let defaults = table(&[("acme/lib", &[".", "./.", "tests/."])]);
        let merged = merge_cleanup_paths(&defaults, &BTreeMap::new(), &IgnoreConfig::default());
        assert_eq!(merged.resolve_paths("acme/lib"), ["tests"]);
    }

    #[test]
    fn test_validate_cleanup_path() {
        assert!(validate_cleanup_path("a/b", "tests").is_ok());
        assert!(validate_cleanup_path("a/b", "src/Tests").is_ok());
        assert!(validate_cleanup_path("a/b", "").is_err());
        assert!(validate_cleanup_path("a/b", "/etc").is_err());
        assert!(validate_cleanup_path("a/b", "../other").is_err());
        assert!(validate_cleanup_path("a/b", "docs/../../x").is_err());
        assert!(validate_cleanup_path("a/b", "tests/.").is_ok());

        for root in [".", "./.", "./", " . "] {
            match validate_cleanup_path("a/b", root) {
                Err(HardenError::InvalidCleanupPath {
                    reason,
                    ..
                }) => assert!(reason.contains("package directory"), "{root}: {reason}"),
                other => panic!("Expected {root:?} to be rejected, got {other:?}"),
            }
        }

        match validate_cleanup_path("a/b", "../x") {
            Err(HardenError::InvalidCleanupPath {
                package,
                ..
            }) => assert_eq!(package, "a/b"),
            other => panic!("Expected InvalidCleanupPath, got {other:?}"),
        }
    }
}
