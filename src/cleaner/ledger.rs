//! Packages already processed in this process.

use std::collections::BTreeSet;

use crate::core::PackageName;

/// Set of packages the cleaner has already attempted.
///
/// Created empty, only ever grows, and lives exactly as long as the
/// [`super::VendorCleaner`] that owns it. An entry means "attempted", not
/// "succeeded": a package whose removals all failed is still recorded and will
/// not be retried by a later event in the same run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedLedger {
    packages: BTreeSet<PackageName>,
}

impl CleanedLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` was already processed.
    #[must_use]
    pub fn contains(&self, name: &PackageName) -> bool {
        self.packages.contains(name)
    }

    /// Record `name`; returns `true` if it was not recorded before.
    pub fn mark(&mut self, name: PackageName) -> bool {
        self.packages.insert(name)
    }

    /// Number of recorded packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether nothing was processed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Recorded packages in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageName> {
        self.packages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_case_insensitive() {
        let mut ledger = CleanedLedger::new();
        assert!(ledger.is_empty());

        assert!(ledger.mark(PackageName::new("Vendor/Package")));
        assert!(!ledger.mark(PackageName::new("vendor/package")));
        assert!(ledger.contains(&PackageName::new("VENDOR/PACKAGE")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut ledger = CleanedLedger::new();
        ledger.mark(PackageName::new("zeta/lib"));
        ledger.mark(PackageName::new("alpha/lib"));

        let names: Vec<&str> = ledger.iter().map(PackageName::as_str).collect();
        assert_eq!(names, vec!["alpha/lib", "zeta/lib"]);
    }
}
