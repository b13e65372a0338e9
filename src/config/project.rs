//! Project-level cleanup configuration.
//!
//! Projects extend or narrow the built-in table with two directives:
//!
//! ```toml
//! # vendor-harden.toml
//! [extend]
//! "acme/widgets" = ["docs", "examples"]
//!
//! [ignore]
//! packages = ["phpunit/phpunit"]
//!
//! [ignore.paths]
//! "twig/twig" = ["doc"]
//! ```
//!
//! The same schema may live in `composer.json` under `extra.vendor-hardening`.
//!
//! # Lookup order
//!
//! 1. An explicit file (`--config` or `VENDOR_HARDEN_CONFIG`)
//! 2. `vendor-harden.toml` in the project directory
//! 3. `extra.vendor-hardening` in `composer.json`
//! 4. No project configuration (built-in table only)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::composer::ComposerManifest;
use super::defaults::default_cleanup_paths;
use super::merge::{CleanupConfig, merge_cleanup_paths, validate_cleanup_path};
use crate::constants::{COMPOSER_EXTRA_KEY, COMPOSER_JSON, PROJECT_CONFIG_FILE};
use crate::core::HardenError;

/// Project extensions and exclusions applied on top of the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Paths appended to (or added as) a package's cleanup set
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extend: BTreeMap<String, Vec<String>>,

    /// Packages and paths that must never be removed
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

/// Exclusions at package and path granularity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    /// Packages dropped from the cleanup table entirely
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,

    /// Single paths removed from a package's set
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, Vec<String>>,
}

/// Where the project configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A standalone TOML or JSON file
    File(PathBuf),
    /// The `extra` section of `composer.json`
    ComposerExtra(PathBuf),
    /// Nothing found; built-in table only
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::ComposerExtra(path) => {
                write!(f, "{} (extra.{COMPOSER_EXTRA_KEY})", path.display())
            }
            Self::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

impl ProjectConfig {
    /// Load a standalone configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON; a file named `composer.json`
    /// is read through its `extra` section. Everything else is TOML.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not match the schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.file_name().and_then(|name| name.to_str()) == Some(COMPOSER_JSON) {
            let manifest = ComposerManifest::load(path)?.ok_or_else(|| {
                HardenError::ConfigError {
                    message: format!("Configuration file not found: {}", path.display()),
                }
            })?;
            return Ok(manifest.hardening_config(path)?.unwrap_or_default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::Error::from(HardenError::ConfigError {
                    message: format!("Configuration file not found: {}", path.display()),
                })
            } else {
                anyhow::Error::from(e)
                    .context(format!("Failed to read configuration from {}", path.display()))
            }
        })?;

        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| {
            HardenError::ConfigParseError {
                file: path.display().to_string(),
                reason,
            }
            .into()
        })
    }

    /// Find and load the project configuration for `project_dir`.
    ///
    /// `explicit` is the file named on the command line or in
    /// `VENDOR_HARDEN_CONFIG`; relative paths resolve against `project_dir`.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing or any candidate file is invalid.
    pub fn discover(project_dir: &Path, explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(explicit) = explicit {
            let path = project_dir.join(explicit);
            let config = Self::load_from(&path)?;
            tracing::debug!("Loaded cleanup configuration from {}", path.display());
            return Ok((config, ConfigSource::File(path)));
        }

        let toml_path = project_dir.join(PROJECT_CONFIG_FILE);
        if toml_path.exists() {
            let config = Self::load_from(&toml_path)?;
            tracing::debug!("Loaded cleanup configuration from {}", toml_path.display());
            return Ok((config, ConfigSource::File(toml_path)));
        }

        let composer_path = project_dir.join(COMPOSER_JSON);
        if let Some(manifest) = ComposerManifest::load(&composer_path)? {
            if let Some(config) = manifest.hardening_config(&composer_path)? {
                tracing::debug!("Loaded cleanup configuration from {}", composer_path.display());
                return Ok((config, ConfigSource::ComposerExtra(composer_path)));
            }
        }

        tracing::debug!("No project cleanup configuration in {}", project_dir.display());
        Ok((Self::default(), ConfigSource::BuiltIn))
    }

    /// Check every extension path.
    ///
    /// # Errors
    ///
    /// Returns [`HardenError::InvalidCleanupPath`] for the first unsafe path.
    pub fn validate(&self) -> Result<(), HardenError> {
        for (package, paths) in &self.extend {
            if package.trim().is_empty() {
                return Err(HardenError::ConfigError {
                    message: "Empty package name in [extend]".to_string(),
                });
            }
            for path in paths {
                validate_cleanup_path(package, path)?;
            }
        }
        Ok(())
    }

    /// Validate and merge with the built-in table.
    ///
    /// # Errors
    ///
    /// Propagates [`ProjectConfig::validate`] failures.
    pub fn cleanup_config(&self) -> Result<CleanupConfig, HardenError> {
        self.validate()?;
        Ok(merge_cleanup_paths(&default_cleanup_paths(), &self.extend, &self.ignore))
    }
}

/// Load the project configuration and merge it with the built-in table.
///
/// # Errors
///
/// Fails when configuration discovery or validation fails.
pub fn load_cleanup_config(
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<(CleanupConfig, ConfigSource)> {
    let (project, source) = ProjectConfig::discover(project_dir, explicit)?;
    let config = project
        .cleanup_config()
        .with_context(|| format!("Invalid cleanup configuration in {source}"))?;
    Ok((config, source))
}
