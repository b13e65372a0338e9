//! In-memory package repository.

use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::{HardenError, InstalledPackage};
use crate::registry::PackageRepository;

/// [`PackageRepository`] serving a fixed snapshot.
///
/// Counts how often it is read and can be told to fail, which is how tests
/// exercise registry failures without a broken `installed.json`.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    packages: Vec<InstalledPackage>,
    failure: Option<String>,
    reads: AtomicUsize,
}

impl MemoryRepository {
    /// Repository holding `packages`.
    pub fn new(packages: impl IntoIterator<Item = InstalledPackage>) -> Self {
        Self {
            packages: packages.into_iter().collect(),
            failure: None,
            reads: AtomicUsize::new(0),
        }
    }

    /// Repository whose every read fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of reads so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl PackageRepository for MemoryRepository {
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(HardenError::RegistryUnavailable {
                path: message.clone(),
            }
            .into());
        }

        Ok(self.packages.clone())
    }
}
