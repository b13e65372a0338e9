//! One command invocation's worth of event handling.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{EventInvocation, HookAction, HookRegistry};
use crate::access::write_access_restriction_files;
use crate::cleaner::{PackageReport, SweepReport, VendorCleaner};
use crate::core::HardenError;
use crate::registry::PackageRepository;

/// What one action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// A single package was handled
    Cleaned(PackageReport),
    /// All installed packages were swept
    Swept(SweepReport),
    /// Access restriction files were written
    Protected(Vec<PathBuf>),
}

/// Owns the cleaner, and with it the ledger, for every event of one run.
///
/// Handlers never keep state of their own: anything that has to survive from
/// one event to the next lives in the [`VendorCleaner`] held here.
#[derive(Debug)]
pub struct Session<R> {
    cleaner: VendorCleaner<R>,
    vendor_dir: PathBuf,
    registry: HookRegistry,
}

impl<R: PackageRepository> Session<R> {
    /// Session using [`HookRegistry::standard`].
    pub fn new(cleaner: VendorCleaner<R>, vendor_dir: impl Into<PathBuf>) -> Self {
        Self::with_registry(cleaner, vendor_dir, HookRegistry::standard())
    }

    /// Session using a custom table.
    pub fn with_registry(
        cleaner: VendorCleaner<R>,
        vendor_dir: impl Into<PathBuf>,
        registry: HookRegistry,
    ) -> Self {
        Self {
            cleaner,
            vendor_dir: vendor_dir.into(),
            registry,
        }
    }

    /// The cleaner shared by all events.
    pub const fn cleaner(&self) -> &VendorCleaner<R> {
        &self.cleaner
    }

    /// The vendor directory.
    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }

    /// Run every action registered for the invocation's event, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first systemic failure (registry unreadable, marker files
    /// not writable, per-package event without a package). Per-path removal
    /// failures are part of the returned reports instead.
    pub async fn dispatch(&mut self, invocation: &EventInvocation) -> Result<Vec<HookOutcome>> {
        let actions: Vec<HookAction> = self.registry.actions_for(invocation.event).collect();
        tracing::debug!("Dispatching {} to {} action(s)", invocation, actions.len());

        let mut outcomes = Vec::with_capacity(actions.len());
        for action in actions {
            let outcome = match action {
                HookAction::CleanAll => HookOutcome::Swept(self.cleaner.clean_all().await?),
                HookAction::CleanPackage => {
                    let package = invocation.package.as_ref().ok_or_else(|| {
                        HardenError::MissingEventPackage {
                            event: invocation.event.to_string(),
                        }
                    })?;
                    HookOutcome::Cleaned(self.cleaner.clean_one(package).await?)
                }
                HookAction::WriteAccessRestriction => {
                    let written = write_access_restriction_files(&self.vendor_dir)?;
                    self.cleaner.reporter().verbose(&format!(
                        "Wrote access restriction files to {}.",
                        self.vendor_dir.display()
                    ));
                    HookOutcome::Protected(written)
                }
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::SkipReason;
    use crate::core::{PackageName, Reporter, Verbosity};
    use crate::hooks::LifecycleEvent;
    use crate::test_utils::{MemoryRepository, VendorFixture, cleanup_config};

    fn session(fixture: &VendorFixture) -> Session<MemoryRepository> {
        let cleaner = VendorCleaner::new(
            cleanup_config(&[("acme/a", &["tests"]), ("acme/b", &["docs"])]),
            MemoryRepository::new(fixture.packages().to_vec()),
            Reporter::capture(Verbosity::VeryVerbose),
        );
        Session::new(cleaner, fixture.vendor_dir())
    }

    #[tokio::test]
    async fn test_package_event_then_sweep_shares_ledger() {
        let mut fixture = VendorFixture::new().unwrap();
        fixture.add_package("acme/a", &["tests"]).unwrap();
        fixture.add_package("acme/b", &["docs"]).unwrap();
        let mut session = session(&fixture);

        let outcomes = session
            .dispatch(&EventInvocation::for_package(LifecycleEvent::PostPackageInstall, "Acme/A"))
            .await
            .unwrap();
        assert!(matches!(&outcomes[..], [HookOutcome::Cleaned(report)] if report.removed() == 1));

        let outcomes =
            session.dispatch(&EventInvocation::new(LifecycleEvent::PostInstallCmd)).await.unwrap();
        let [HookOutcome::Swept(sweep)] = &outcomes[..] else {
            panic!("unexpected outcomes: {outcomes:?}");
        };
        let swept: Vec<&str> = sweep.cleaned_packages().map(PackageName::as_str).collect();
        assert_eq!(swept, vec!["acme/b"]);
        assert_eq!(session.cleaner().ledger().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_package_events_clean_once() {
        let mut fixture = VendorFixture::new().unwrap();
        fixture.add_package("acme/a", &["tests"]).unwrap();
        let mut session = session(&fixture);
        let invocation = EventInvocation::for_package(LifecycleEvent::PostPackageUpdate, "acme/a");

        session.dispatch(&invocation).await.unwrap();
        let outcomes = session.dispatch(&invocation).await.unwrap();

        assert!(matches!(
            &outcomes[..],
            [HookOutcome::Cleaned(report)] if report.skipped == Some(SkipReason::AlreadyCleaned)
        ));
    }

    #[tokio::test]
    async fn test_autoload_dump_writes_marker_files() {
        let fixture = VendorFixture::new().unwrap();
        let mut session = session(&fixture);

        let outcomes = session
            .dispatch(&EventInvocation::new(LifecycleEvent::PostAutoloadDump))
            .await
            .unwrap();

        assert!(matches!(&outcomes[..], [HookOutcome::Protected(paths)] if paths.len() == 2));
        assert!(fixture.vendor_dir().join(".htaccess").is_file());
        assert!(fixture.vendor_dir().join("web.config").is_file());
        // Marker files are independent of the ledger
        assert!(session.cleaner().ledger().is_empty());
    }

    #[tokio::test]
    async fn test_package_action_without_package_fails() {
        let fixture = VendorFixture::new().unwrap();
        let mut session = session(&fixture);

        let err = session
            .dispatch(&EventInvocation::new(LifecycleEvent::PostPackageInstall))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HardenError>(),
            Some(HardenError::MissingEventPackage { .. })
        ));
    }

    #[tokio::test]
    async fn test_sweep_propagates_registry_failure() {
        let cleaner = VendorCleaner::new(
            cleanup_config(&[("acme/a", &["tests"])]),
            MemoryRepository::failing("installed.json"),
            Reporter::capture(Verbosity::Normal),
        );
        let mut session = Session::new(cleaner, "/nonexistent/vendor");

        let result = session.dispatch(&EventInvocation::new(LifecycleEvent::PostUpdateCmd)).await;
        assert!(result.is_err());
    }
}
