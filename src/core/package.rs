//! Package identifiers and the read-only view of an installed package.
//!
//! Composer package names are case-insensitive. [`PackageName`] normalises to
//! lower case on construction so that every map, set and ledger keyed by it
//! compares names the same way Composer does.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A case-insensitive `vendor/name` package identifier.
///
/// The inner string is always lower case.
///
/// # Examples
///
/// ```rust
/// use vendor_harden_cli::core::PackageName;
///
/// assert_eq!(PackageName::new("Vendor/Package"), PackageName::new("vendor/package"));
/// assert_eq!(PackageName::new("Twig/Twig").as_str(), "twig/twig");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Create a normalised package name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// The normalised identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The vendor half of `vendor/name`, if present.
    #[must_use]
    pub fn vendor(&self) -> Option<&str> {
        self.0.split_once('/').map(|(vendor, _)| vendor)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PackageName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PackageName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// A package as recorded in the host package manager's local repository.
///
/// This is a read-only snapshot taken when the registry is read; nothing in
/// this crate mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Normalised identifier
    pub name: PackageName,
    /// Name as written in the registry, used for display
    pub pretty_name: String,
    /// Installed version, if the registry records one
    pub version: Option<String>,
    /// Absolute install directory; `None` for metapackages
    pub install_path: Option<PathBuf>,
    /// Binaries declared by the package (`bin` in composer.json), relative to the install path
    pub binaries: Vec<String>,
}

impl InstalledPackage {
    /// Create a package installed at `install_path` with no version or binaries.
    pub fn new(name: impl AsRef<str>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            name: PackageName::new(name.as_ref()),
            pretty_name: name.as_ref().to_string(),
            version: None,
            install_path: Some(install_path.into()),
            binaries: Vec::new(),
        }
    }

    /// Set the declared binaries.
    #[must_use]
    pub fn with_binaries<I, S>(mut self, binaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binaries = binaries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Whether one of the package's binaries lives at or below `relative`.
    ///
    /// Composer links `vendor/bin/*` to these files, so a cleanup path that
    /// contains one must be retained.
    #[must_use]
    pub fn contains_binary(&self, relative: &str) -> bool {
        let cleanup = normalized_components(Path::new(relative));
        if cleanup.is_empty() {
            return false;
        }

        self.binaries.iter().any(|bin| {
            let bin = normalized_components(Path::new(bin));
            bin.len() >= cleanup.len() && bin[..cleanup.len()] == cleanup[..]
        })
    }
}

/// Path components with `.` dropped, for prefix comparison.
fn normalized_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
