//! Configuration management for vendor-harden
//!
//! This module turns the built-in cleanup table plus whatever the project
//! declares into one [`CleanupConfig`], and works out where the vendor
//! directory lives.
//!
//! # Modules
//!
//! - `defaults` - The built-in package → paths table
//! - `project` - Project-level `extend` / `ignore` directives and their lookup
//! - `merge` - The pure merge function and path validation
//! - `composer` - The few `composer.json` keys this crate reads
//!
//! # Configuration Files
//!
//! ## `vendor-harden.toml`
//!
//! ```toml
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
//! ## `composer.json`
//!
//! ```json
//! {
//!     "config": { "vendor-dir": "lib/vendor" },
//!     "extra": {
//!         "vendor-hardening": {
//!             "extend": { "acme/widgets": ["docs"] },
//!             "ignore": { "packages": ["phpunit/phpunit"] }
//!         }
//!     }
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `VENDOR_HARDEN_CONFIG` - Explicit configuration file
//! - `COMPOSER_VENDOR_DIR` - Relocated vendor directory (Composer's own variable)

pub mod composer;
pub mod defaults;
pub mod merge;
pub mod project;

pub use composer::ComposerManifest;
pub use defaults::{DEFAULT_CLEANUP_PATHS, default_cleanup_paths};
pub use merge::{CleanupConfig, merge_cleanup_paths, normalize_relative, validate_cleanup_path};
pub use project::{ConfigSource, IgnoreConfig, ProjectConfig, load_cleanup_config};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::{COMPOSER_JSON, DEFAULT_VENDOR_DIR};

/// Project root and vendor directory of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Directory holding `composer.json`
    pub project_dir: PathBuf,
    /// Dependency root all packages are installed under
    pub vendor_dir: PathBuf,
}

impl ProjectPaths {
    /// Work out the vendor directory for `project_dir`.
    ///
    /// Precedence: `explicit` (command line), then `env_vendor_dir`
    /// (`COMPOSER_VENDOR_DIR`), then `config.vendor-dir` in `composer.json`, then
    /// `<project>/vendor`. Relative values resolve against `project_dir`.
    ///
    /// # Errors
    ///
    /// Fails only when `composer.json` exists but cannot be parsed.
    pub fn resolve(
        project_dir: &Path,
        explicit: Option<&Path>,
        env_vendor_dir: Option<&str>,
    ) -> Result<Self> {
        let vendor_dir = if let Some(explicit) = explicit {
            project_dir.join(explicit)
        } else if let Some(env) = env_vendor_dir.filter(|value| !value.trim().is_empty()) {
            project_dir.join(env.trim())
        } else {
            let manifest = ComposerManifest::load(&project_dir.join(COMPOSER_JSON))?;
            match manifest.and_then(|manifest| manifest.config.vendor_dir) {
                Some(configured) => project_dir.join(configured),
                None => project_dir.join(DEFAULT_VENDOR_DIR),
            }
        };

        tracing::debug!("Vendor directory resolved to {}", vendor_dir.display());

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            vendor_dir,
        })
    }
}
