//! Installed package registry adapter.
//!
//! The host package manager is the authority on what is installed. This module
//! exposes that knowledge through the [`PackageRepository`] trait so the cleaner
//! never depends on a particular on-disk format, and provides the Composer
//! implementation, [`InstalledJsonRepository`].
//!
//! Reads are never cached: every call returns a fresh snapshot of the
//! registry as it is on disk at call time.

mod installed_json;

pub use installed_json::InstalledJsonRepository;

use anyhow::Result;

use crate::core::{InstalledPackage, PackageName};

/// Read-only access to the set of installed packages.
pub trait PackageRepository {
    /// Snapshot of every installed package, in registry order.
    ///
    /// # Errors
    ///
    /// Implementations surface whatever their backing store fails with; callers
    /// do not retry.
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>>;

    /// Look up a single installed package.
    ///
    /// # Errors
    ///
    /// Same as [`PackageRepository::installed_packages`].
    fn find(&self, name: &PackageName) -> Result<Option<InstalledPackage>> {
        Ok(self.installed_packages()?.into_iter().find(|package| &package.name == name))
    }
}

impl<R: PackageRepository + ?Sized> PackageRepository for &R {
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        (**self).installed_packages()
    }

    fn find(&self, name: &PackageName) -> Result<Option<InstalledPackage>> {
        (**self).find(name)
    }
}
