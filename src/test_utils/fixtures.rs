//! A throwaway Composer project on disk.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::{COMPOSER_JSON, COMPOSER_META_DIR, INSTALLED_JSON, PROJECT_CONFIG_FILE};
use crate::core::InstalledPackage;

/// Temporary project directory with a `vendor/` tree.
///
/// Packages are created on disk by [`VendorFixture::add_package`]; nothing is
/// registered as installed until [`VendorFixture::write_installed_json`] runs,
/// so tests can also model "configured but not installed".
#[derive(Debug)]
pub struct VendorFixture {
    _temp: TempDir,
    project_dir: PathBuf,
    vendor_dir: PathBuf,
    packages: Vec<InstalledPackage>,
}

impl VendorFixture {
    /// Empty project with an empty `vendor/` directory.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp dir")?;
        let project_dir = temp.path().join("project");
        let vendor_dir = project_dir.join("vendor");
        fs::create_dir_all(vendor_dir.join(COMPOSER_META_DIR))?;

        Ok(Self {
            _temp: temp,
            project_dir,
            vendor_dir,
            packages: Vec::new(),
        })
    }

    /// Project root.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `<project>/vendor`.
    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }

    /// Packages added so far.
    pub fn packages(&self) -> &[InstalledPackage] {
        &self.packages
    }

    /// `vendor/<name>/<relative>`.
    pub fn path(&self, name: &str, relative: &str) -> PathBuf {
        self.vendor_dir.join(name.to_lowercase()).join(relative)
    }

    /// Create `vendor/<name>` with a `src/` directory plus each of `dirs`, every
    /// directory holding one file.
    pub fn add_package(&mut self, name: &str, dirs: &[&str]) -> Result<&mut Self> {
        self.add_package_with_binaries(name, dirs, &[])
    }

    /// Like [`VendorFixture::add_package`], also creating each of `binaries` as
    /// an executable file and recording it in the package's `bin` list.
    pub fn add_package_with_binaries(
        &mut self,
        name: &str,
        dirs: &[&str],
        binaries: &[&str],
    ) -> Result<&mut Self> {
        let install_path = self.vendor_dir.join(name.to_lowercase());

        for dir in std::iter::once(&"src").chain(dirs) {
            let dir_path = install_path.join(dir);
            fs::create_dir_all(&dir_path)
                .with_context(|| format!("Failed to create {}", dir_path.display()))?;
            fs::write(dir_path.join("placeholder.txt"), format!("{name}/{dir}"))?;
        }

        for bin in binaries {
            let bin_path = install_path.join(bin);
            if let Some(parent) = bin_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&bin_path, "#!/usr/bin/env php\n")?;
        }

        self.packages.push(
            InstalledPackage::new(name, &install_path)
                .with_version("1.0.0")
                .with_binaries(binaries.iter().copied()),
        );
        Ok(self)
    }

    /// Create a file at `vendor/<name>/<relative>`.
    pub fn add_file(&self, name: &str, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name, relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `vendor/composer/installed.json` (Composer 2 format) listing every
    /// added package.
    pub fn write_installed_json(&self) -> Result<PathBuf> {
        let packages: Vec<_> = self
            .packages
            .iter()
            .map(|package| {
                json!({
                    "name": package.pretty_name,
                    "version": package.version,
                    "type": "library",
                    "bin": package.binaries,
                    "install-path": format!("../{}", package.name),
                })
            })
            .collect();

        let content = serde_json::to_string_pretty(&json!({
            "packages": packages,
            "dev": true,
            "dev-package-names": [],
        }))?;

        let path = self.vendor_dir.join(COMPOSER_META_DIR).join(INSTALLED_JSON);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `vendor-harden.toml` in the project root.
    pub fn write_project_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(PROJECT_CONFIG_FILE);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `composer.json` in the project root.
    pub fn write_composer_json(&self, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(COMPOSER_JSON);
        fs::write(&path, content)?;
        Ok(path)
    }
}
