//! Composer's `vendor/composer/installed.json`.
//!
//! Two shapes exist in the wild:
//!
//! - Composer 2 writes an object with a `packages` array; each entry carries an
//!   `install-path` relative to `vendor/composer/` (or `null` for metapackages).
//! - Composer 1 writes a bare array with no `install-path`; packages live at
//!   `vendor/<name>`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::PackageRepository;
use crate::constants::{COMPOSER_META_DIR, INSTALLED_JSON};
use crate::core::{HardenError, InstalledPackage, PackageName};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstalledFile {
    Composer2 {
        packages: Vec<RawPackage>,
    },
    Composer1(Vec<RawPackage>),
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "type")]
    package_type: Option<String>,
    // Missing means Composer 1; explicit null means "not installed on disk"
    #[serde(default, rename = "install-path", deserialize_with = "deserialize_install_path")]
    install_path: Option<Option<String>>,
    #[serde(default)]
    bin: Vec<String>,
}

fn deserialize_install_path<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// [`PackageRepository`] backed by Composer's local repository file.
#[derive(Debug, Clone)]
pub struct InstalledJsonRepository {
    vendor_dir: PathBuf,
}

impl InstalledJsonRepository {
    /// Repository for the vendor directory `vendor_dir`.
    pub fn new(vendor_dir: impl Into<PathBuf>) -> Self {
        Self {
            vendor_dir: vendor_dir.into(),
        }
    }

    /// The vendor directory this repository reads from.
    #[must_use]
    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }

    /// Location of `installed.json`.
    #[must_use]
    pub fn installed_json_path(&self) -> PathBuf {
        self.vendor_dir.join(COMPOSER_META_DIR).join(INSTALLED_JSON)
    }

    fn to_package(&self, raw: RawPackage) -> InstalledPackage {
        let install_path = match raw.install_path {
            // Composer 2: relative to vendor/composer
            Some(Some(relative)) => {
                Some(normalize_lexically(&self.vendor_dir.join(COMPOSER_META_DIR).join(relative)))
            }
            Some(None) => None,
            // Composer 1 never recorded install paths
            None if raw.package_type.as_deref() == Some("metapackage") => None,
            None => Some(self.vendor_dir.join(&raw.name)),
        };

        InstalledPackage {
            name: PackageName::new(&raw.name),
            pretty_name: raw.name,
            version: raw.version,
            install_path,
            binaries: raw.bin,
        }
    }
}

impl PackageRepository for InstalledJsonRepository {
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        let path = self.installed_json_path();

        let content = std::fs::read_to_string(&path)
            .map_err(|e| {
                tracing::debug!("Cannot read {}: {}", path.display(), e);
                HardenError::RegistryUnavailable {
                    path: path.display().to_string(),
                }
            })
            .with_context(|| "Failed to read the installed package registry")?;

        let file: InstalledFile = serde_json::from_str(&content).map_err(|e| {
            HardenError::RegistryParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let raw_packages = match file {
            InstalledFile::Composer2 {
                packages,
            } => packages,
            InstalledFile::Composer1(packages) => packages,
        };

        let packages: Vec<InstalledPackage> =
            raw_packages.into_iter().map(|raw| self.to_package(raw)).collect();

        tracing::debug!("Read {} installed packages from {}", packages.len(), path.display());
        Ok(packages)
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}
