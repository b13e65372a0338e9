//! State shared by every command.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cleaner::VendorCleaner;
use crate::config::{CleanupConfig, ConfigSource, ProjectPaths, load_cleanup_config};
use crate::core::Reporter;
use crate::registry::InstalledJsonRepository;

/// Everything a command needs: where the project is, what to clean, and where
/// to report.
#[derive(Debug)]
pub struct CommandContext {
    /// Project root and vendor directory
    pub paths: ProjectPaths,
    /// Merged cleanup configuration
    pub config: CleanupConfig,
    /// Where the project configuration came from
    pub config_source: ConfigSource,
    /// Status output
    pub reporter: Reporter,
}

impl CommandContext {
    /// Resolve paths and load configuration.
    ///
    /// # Errors
    ///
    /// Fails when `composer.json` or the project configuration is invalid.
    pub fn load(
        project_dir: &Path,
        vendor_dir: Option<&Path>,
        env_vendor_dir: Option<&str>,
        config_path: Option<&Path>,
        reporter: Reporter,
    ) -> Result<Self> {
        let paths = ProjectPaths::resolve(project_dir, vendor_dir, env_vendor_dir)?;
        let (config, config_source) = load_cleanup_config(project_dir, config_path)?;

        tracing::debug!(
            "{} packages configured for cleanup ({})",
            config.len(),
            config_source
        );

        Ok(Self {
            paths,
            config,
            config_source,
            reporter,
        })
    }

    /// The vendor directory.
    pub fn vendor_dir(&self) -> &Path {
        &self.paths.vendor_dir
    }

    /// Registry adapter for the vendor directory.
    pub fn repository(&self) -> InstalledJsonRepository {
        InstalledJsonRepository::new(self.paths.vendor_dir.clone())
    }

    /// Consume the context into a cleaner with an empty ledger, plus the vendor
    /// directory.
    pub fn into_cleaner(self) -> (VendorCleaner<InstalledJsonRepository>, PathBuf) {
        let repository = self.repository();
        let cleaner = VendorCleaner::new(self.config, repository, self.reporter);
        (cleaner, self.paths.vendor_dir)
    }
}
