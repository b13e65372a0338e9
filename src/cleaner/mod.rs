//! Cleanup orchestration.
//!
//! [`VendorCleaner`] reconciles the merged [`CleanupConfig`] against the set of
//! installed packages and removes configured paths from each package's install
//! directory. One cleaner lives for one command invocation and owns the
//! [`CleanedLedger`], so a package touched by a per-package event is skipped by
//! the post-command sweep that follows it.
//!
//! Per-path failures never abort anything: they are recorded in the
//! [`PackageReport`], printed, and the batch moves on. Only a registry read
//! failure during a sweep is returned as an error.
//!
//! # Example
//!
//! ```rust,no_run
//! use vendor_harden_cli::cleaner::VendorCleaner;
//! use vendor_harden_cli::config::load_cleanup_config;
//! use vendor_harden_cli::core::Reporter;
//! use vendor_harden_cli::registry::InstalledJsonRepository;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (config, _source) = load_cleanup_config(Path::new("."), None)?;
//! let repository = InstalledJsonRepository::new("vendor");
//! let mut cleaner = VendorCleaner::new(config, repository, Reporter::default());
//!
//! cleaner.clean_one("twig/twig").await?;
//! // twig/twig is not cleaned a second time
//! let sweep = cleaner.clean_all().await?;
//! println!("{} paths removed", sweep.removed());
//! # Ok(())
//! # }
//! ```

mod ledger;
mod report;

pub use ledger::CleanedLedger;
pub use report::{PackageReport, SkipReason, SweepReport};

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::config::CleanupConfig;
use crate::core::{InstalledPackage, PackageName, Reporter};
use crate::registry::PackageRepository;
use crate::utils::fs::{RemovalOutcome, remove_path};

/// Removes configured paths from installed packages, at most once per package.
#[derive(Debug)]
pub struct VendorCleaner<R> {
    config: CleanupConfig,
    repository: R,
    ledger: CleanedLedger,
    reporter: Reporter,
}

impl<R: PackageRepository> VendorCleaner<R> {
    /// Cleaner with an empty ledger.
    pub fn new(config: CleanupConfig, repository: R, reporter: Reporter) -> Self {
        Self {
            config,
            repository,
            ledger: CleanedLedger::new(),
            reporter,
        }
    }

    /// The merged configuration.
    pub const fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// The package repository.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Packages processed so far.
    pub const fn ledger(&self) -> &CleanedLedger {
        &self.ledger
    }

    /// The status reporter.
    pub const fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Clean one package by name.
    ///
    /// A second call for the same package (in any letter case) is a no-op. A
    /// package with no configured paths is recorded without touching the
    /// registry or the disk. A configured package that is not installed, or has
    /// no install directory, is recorded and skipped.
    ///
    /// # Errors
    ///
    /// Fails only when the registry cannot be read to find the package's
    /// install path; the package is then left out of the ledger.
    pub async fn clean_one(&mut self, name: impl AsRef<str>) -> Result<PackageReport> {
        let name = PackageName::new(name);

        if self.ledger.contains(&name) {
            self.reporter.very_verbose_comment(&format!("Package {name} already cleaned."));
            return Ok(PackageReport::skipped(name, SkipReason::AlreadyCleaned));
        }

        if !self.config.contains(&name) {
            return Ok(self.skip(name, SkipReason::NotConfigured));
        }

        let package = self
            .repository
            .find(&name)
            .with_context(|| format!("Cannot look up installed package {name}"))?;

        match package {
            Some(package) => Ok(self.clean_package(&package).await),
            None => Ok(self.skip(name, SkipReason::NotInstalled)),
        }
    }

    /// Clean every installed package that has configured paths and is not yet
    /// in the ledger, in ascending name order.
    ///
    /// # Errors
    ///
    /// Fails when the installed package registry cannot be read. Nothing is
    /// removed in that case.
    pub async fn clean_all(&mut self) -> Result<SweepReport> {
        let installed = self
            .repository
            .installed_packages()
            .context("Cannot read installed packages; the vendor directory was not cleaned")?;

        // Sorted and deduplicated by normalised name
        let installed: BTreeMap<PackageName, InstalledPackage> =
            installed.into_iter().map(|package| (package.name.clone(), package)).collect();

        let pending: Vec<InstalledPackage> = installed
            .into_values()
            .filter(|package| {
                self.config.contains(&package.name) && !self.ledger.contains(&package.name)
            })
            .collect();

        tracing::debug!(
            "Sweep: {} configured, {} already cleaned, {} pending",
            self.config.len(),
            self.ledger.len(),
            pending.len()
        );

        if pending.is_empty() {
            self.reporter.info("Vendor directory already clean.");
            return Ok(SweepReport::default());
        }

        self.reporter.info("Cleaning vendor directory.");

        let mut sweep = SweepReport::default();
        for package in &pending {
            sweep.packages.push(self.clean_package(package).await);
        }

        let (cleaned, removed, failed) = (sweep.packages.len(), sweep.removed(), sweep.failed());
        let summary = format!(
            "Cleaned {cleaned} package{}: {removed} path{} removed.",
            plural(cleaned),
            plural(removed)
        );
        if failed > 0 {
            self.reporter
                .error(&format!("{summary} {failed} path{} could not be removed.", plural(failed)));
        } else {
            self.reporter.info(&summary);
        }

        Ok(sweep)
    }

    /// Clean one installed package: resolve its paths, remove each of them,
    /// then record it in the ledger.
    ///
    /// This is the unit both [`VendorCleaner::clean_one`] and
    /// [`VendorCleaner::clean_all`] run per package. The ledger entry is written
    /// exactly once, whatever the removal outcomes.
    pub async fn clean_package(&mut self, package: &InstalledPackage) -> PackageReport {
        if self.ledger.contains(&package.name) {
            self.reporter
                .very_verbose_comment(&format!("Package {} already cleaned.", package.pretty_name));
            return PackageReport::skipped(package.name.clone(), SkipReason::AlreadyCleaned);
        }

        let relative_paths = self.config.paths_for(&package.name).to_vec();
        if relative_paths.is_empty() {
            return self.skip(package.name.clone(), SkipReason::NotConfigured);
        }

        let Some(install_path) = package.install_path.as_deref() else {
            return self.skip(package.name.clone(), SkipReason::NoInstallPath);
        };

        self.reporter.comment(&format!("Cleaning directories in {} package.", package.pretty_name));

        let mut paths = Vec::with_capacity(relative_paths.len());
        for relative in relative_paths {
            let outcome = if package.contains_binary(&relative) {
                RemovalOutcome::Retained
            } else {
                remove_path(&install_path.join(&relative)).await
            };

            match &outcome {
                RemovalOutcome::Removed => {
                    self.reporter.verbose(&format!("  Removed '{relative}'."));
                }
                RemovalOutcome::AlreadyAbsent => {
                    self.reporter
                        .very_verbose_comment(&format!("  Directory '{relative}' not found."));
                }
                RemovalOutcome::Retained => {
                    self.reporter.very_verbose_comment(&format!(
                        "  Retaining '{relative}': it contains a package binary."
                    ));
                }
                RemovalOutcome::Failed {
                    reason,
                } => {
                    self.reporter.error(&format!(
                        "  Failure removing '{relative}' in package {}: {reason}",
                        package.pretty_name
                    ));
                }
            }

            paths.push((relative, outcome));
        }

        self.ledger.mark(package.name.clone());

        PackageReport {
            package: package.name.clone(),
            paths,
            skipped: None,
        }
    }

    fn skip(&mut self, name: PackageName, reason: SkipReason) -> PackageReport {
        self.reporter.very_verbose_comment(&format!("Skipping {name}: {reason}."));
        self.ledger.mark(name.clone());
        PackageReport::skipped(name, reason)
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
