//! The parts of `composer.json` this crate reads.
//!
//! Only two keys matter: `config.vendor-dir`, which relocates the vendor
//! directory, and `extra.vendor-hardening`, which may carry the cleanup
//! configuration when no `vendor-harden.toml` exists. Everything else is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::constants::COMPOSER_EXTRA_KEY;
use crate::core::HardenError;

use super::project::ProjectConfig;

/// Subset of a Composer project manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerManifest {
    /// `config` section
    #[serde(default)]
    pub config: ComposerConfig,
    /// `extra` section, kept untyped since other plugins own most of it
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Subset of the `config` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerConfig {
    /// Relocated vendor directory, relative to the project root
    #[serde(rename = "vendor-dir")]
    pub vendor_dir: Option<String>,
}

impl ComposerManifest {
    /// Load `composer.json` from `path`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`HardenError::ConfigParseError`] when the file is not valid JSON.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let manifest = serde_json::from_str(&content).map_err(|e| {
            HardenError::ConfigParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Some(manifest))
    }

    /// The cleanup configuration stored under `extra`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HardenError::ConfigParseError`] when the section does not match
    /// the configuration schema.
    pub fn hardening_config(&self, path: &Path) -> Result<Option<ProjectConfig>, HardenError> {
        let Some(section) = self.extra.get(COMPOSER_EXTRA_KEY) else {
            return Ok(None);
        };

        serde_json::from_value(section.clone()).map(Some).map_err(|e| {
            HardenError::ConfigParseError {
                file: format!("{} (extra.{COMPOSER_EXTRA_KEY})", path.display()),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_manifest() {
        let temp = tempdir().unwrap();
        let manifest = ComposerManifest::load(&temp.path().join("composer.json")).unwrap();
        assert!(manifest.is_none());
    }

    #[test]
    fn test_vendor_dir_and_extra() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("composer.json");
        std::fs::write(
            &path,
            r#"{
                "name": "acme/site",
                "config": { "vendor-dir": "lib/vendor", "sort-packages": true },
                "extra": {
                    "installer-paths": {},
                    "vendor-hardening": {
                        "extend": { "acme/widgets": ["docs"] },
                        "ignore": { "packages": ["twig/twig"] }
                    }
                }
            }"#,
        )
        .unwrap();

        let manifest = ComposerManifest::load(&path).unwrap().unwrap();
        assert_eq!(manifest.config.vendor_dir.as_deref(), Some("lib/vendor"));

        let config = manifest.hardening_config(&path).unwrap().unwrap();
        assert_eq!(config.extend["acme/widgets"], vec!["docs"]);
        assert_eq!(config.ignore.packages, vec!["twig/twig"]);
    }

    #[test]
    fn test_no_extra_section() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("composer.json");
        std::fs::write(&path, r#"{ "name": "acme/site" }"#).unwrap();

        let manifest = ComposerManifest::load(&path).unwrap().unwrap();
        assert!(manifest.hardening_config(&path).unwrap().is_none());
        assert!(manifest.config.vendor_dir.is_none());
    }

    #[test]
    fn test_invalid_extra_section() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("composer.json");
        std::fs::write(&path, r#"{ "extra": { "vendor-hardening": { "remove": [] } } }"#).unwrap();

        let manifest = ComposerManifest::load(&path).unwrap().unwrap();
        let err = manifest.hardening_config(&path).unwrap_err();
        assert!(matches!(err, HardenError::ConfigParseError { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("composer.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ComposerManifest::load(&path).unwrap_err();
        assert!(err.downcast_ref::<HardenError>().is_some());
    }
}
