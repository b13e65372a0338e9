//! What a cleanup run did.

use std::fmt;

use crate::core::PackageName;
use crate::utils::fs::RemovalOutcome;

/// Why a package was not cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already in the ledger
    AlreadyCleaned,
    /// No cleanup paths configured
    NotConfigured,
    /// Configured, but not in the installed snapshot
    NotInstalled,
    /// Installed without a directory (metapackage)
    NoInstallPath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyCleaned => "already cleaned",
            Self::NotConfigured => "no cleanup paths configured",
            Self::NotInstalled => "not installed",
            Self::NoInstallPath => "no install path",
        })
    }
}

/// Result of one per-package cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    /// The package
    pub package: PackageName,
    /// Each configured relative path with its outcome, in configuration order
    pub paths: Vec<(String, RemovalOutcome)>,
    /// Set when no path was attempted
    pub skipped: Option<SkipReason>,
}

impl PackageReport {
    pub(crate) const fn skipped(package: PackageName, reason: SkipReason) -> Self {
        Self {
            package,
            paths: Vec::new(),
            skipped: Some(reason),
        }
    }

    /// Whether the package was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// Number of paths removed.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.count(|outcome| *outcome == RemovalOutcome::Removed)
    }

    /// Number of paths that could not be removed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(RemovalOutcome::is_failure)
    }

    /// Outcome for `relative`, if it was attempted.
    #[must_use]
    pub fn outcome(&self, relative: &str) -> Option<&RemovalOutcome> {
        self.paths.iter().find(|(path, _)| path == relative).map(|(_, outcome)| outcome)
    }

    fn count(&self, predicate: impl Fn(&RemovalOutcome) -> bool) -> usize {
        self.paths.iter().filter(|(_, outcome)| predicate(outcome)).count()
    }
}

/// Result of a full sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// One report per package processed, in ascending name order
    pub packages: Vec<PackageReport>,
}

impl SweepReport {
    /// Whether the sweep found nothing to do.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.packages.is_empty()
    }

    /// Names of the packages processed.
    pub fn cleaned_packages(&self) -> impl Iterator<Item = &PackageName> {
        self.packages.iter().map(|report| &report.package)
    }

    /// Paths removed across all packages.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.packages.iter().map(PackageReport::removed).sum()
    }

    /// Paths that failed across all packages.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.packages.iter().map(PackageReport::failed).sum()
    }
}
