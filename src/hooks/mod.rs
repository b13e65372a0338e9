//! Lifecycle event wiring.
//!
//! Composer fires named events while it installs or updates dependencies. This
//! module maps those names to what vendor-harden does about them through a
//! plain registration table, [`HookRegistry`], and runs them through a
//! [`Session`] that lives for one command invocation.
//!
//! | Event                  | Action                        |
//! |------------------------|-------------------------------|
//! | `post-install-cmd`     | sweep all installed packages  |
//! | `post-update-cmd`      | sweep all installed packages  |
//! | `post-package-install` | clean the installed package   |
//! | `post-package-update`  | clean the updated package     |
//! | `post-autoload-dump`   | write access restriction files|
//!
//! Events arrive on the command line as `event` or `event:vendor/name`:
//!
//! ```rust
//! use vendor_harden_cli::hooks::{EventInvocation, LifecycleEvent};
//!
//! let invocation: EventInvocation = "post-package-install:Acme/Widgets".parse().unwrap();
//! assert_eq!(invocation.event, LifecycleEvent::PostPackageInstall);
//! assert_eq!(invocation.package.unwrap().as_str(), "acme/widgets");
//! ```

mod session;

pub use session::{HookOutcome, Session};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{HardenError, PackageName};

/// Composer lifecycle events vendor-harden reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleEvent {
    /// `composer install` finished
    PostInstallCmd,
    /// `composer update` finished
    PostUpdateCmd,
    /// One package was installed
    PostPackageInstall,
    /// One package was updated
    PostPackageUpdate,
    /// The autoloader was regenerated
    PostAutoloadDump,
}

impl LifecycleEvent {
    /// Every supported event.
    pub const ALL: [Self; 5] = [
        Self::PostInstallCmd,
        Self::PostUpdateCmd,
        Self::PostPackageInstall,
        Self::PostPackageUpdate,
        Self::PostAutoloadDump,
    ];

    /// Composer's name for the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostInstallCmd => "post-install-cmd",
            Self::PostUpdateCmd => "post-update-cmd",
            Self::PostPackageInstall => "post-package-install",
            Self::PostPackageUpdate => "post-package-update",
            Self::PostAutoloadDump => "post-autoload-dump",
        }
    }

    /// Whether the event concerns a single package.
    #[must_use]
    pub const fn requires_package(self) -> bool {
        matches!(self, Self::PostPackageInstall | Self::PostPackageUpdate)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleEvent {
    type Err = HardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL.into_iter().find(|event| event.as_str() == name).ok_or_else(|| {
            HardenError::UnknownEvent {
                name: name.to_string(),
            }
        })
    }
}

/// What to do when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// Sweep every installed package
    CleanAll,
    /// Clean the event's package
    CleanPackage,
    /// Write `.htaccess` and `web.config` into the vendor directory
    WriteAccessRestriction,
}

/// Ordered `(event, action)` table.
///
/// Built once at startup; an event may map to several actions, which run in
/// registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookRegistry {
    entries: Vec<(LifecycleEvent, HookAction)>,
}

impl HookRegistry {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The table vendor-harden ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(LifecycleEvent::PostInstallCmd, HookAction::CleanAll)
            .register(LifecycleEvent::PostUpdateCmd, HookAction::CleanAll)
            .register(LifecycleEvent::PostPackageInstall, HookAction::CleanPackage)
            .register(LifecycleEvent::PostPackageUpdate, HookAction::CleanPackage)
            .register(LifecycleEvent::PostAutoloadDump, HookAction::WriteAccessRestriction);
        registry
    }

    /// Append an entry.
    pub fn register(&mut self, event: LifecycleEvent, action: HookAction) -> &mut Self {
        self.entries.push((event, action));
        self
    }

    /// Actions registered for `event`, in registration order.
    pub fn actions_for(&self, event: LifecycleEvent) -> impl Iterator<Item = HookAction> + '_ {
        self.entries
            .iter()
            .filter(move |(registered, _)| *registered == event)
            .map(|(_, action)| *action)
    }

    /// All entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[(LifecycleEvent, HookAction)] {
        &self.entries
    }
}

/// One fired event, with its package for per-package events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInvocation {
    /// The event
    pub event: LifecycleEvent,
    /// Target package of `post-package-*` events
    pub package: Option<PackageName>,
}

impl EventInvocation {
    /// Invocation of a command-level event.
    #[must_use]
    pub const fn new(event: LifecycleEvent) -> Self {
        Self {
            event,
            package: None,
        }
    }

    /// Invocation of an event concerning `package`.
    #[must_use]
    pub fn for_package(event: LifecycleEvent, package: impl AsRef<str>) -> Self {
        Self {
            event,
            package: Some(PackageName::new(package)),
        }
    }
}

impl fmt::Display for EventInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}:{package}", self.event),
            None => write!(f, "{}", self.event),
        }
    }
}

impl FromStr for EventInvocation {
    type Err = HardenError;

    /// Parse `event` or `event:vendor/name`.
    ///
    /// A package given with a command-level event is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (event, package) = match s.split_once(':') {
            Some((event, package)) => (event.parse::<LifecycleEvent>()?, Some(package.trim())),
            None => (s.parse::<LifecycleEvent>()?, None),
        };
        let package = package.filter(|package| !package.is_empty());

        if event.requires_package() {
            return match package {
                Some(package) => Ok(Self::for_package(event, package)),
                None => Err(HardenError::MissingEventPackage {
                    event: event.to_string(),
                }),
            };
        }

        if let Some(package) = package {
            tracing::warn!("Ignoring package '{}' given with event '{}'", package, event);
        }
        Ok(Self::new(event))
    }
}
