//! Handle Composer lifecycle events.
//!
//! Intended to be wired into `composer.json` scripts:
//!
//! ```json
//! {
//!     "scripts": {
//!         "post-install-cmd": "vendor-harden hook post-install-cmd",
//!         "post-update-cmd": "vendor-harden hook post-update-cmd",
//!         "post-autoload-dump": "vendor-harden hook post-autoload-dump"
//!     }
//! }
//! ```
//!
//! Several events passed to one invocation share one session, so a package
//! cleaned by `post-package-install:vendor/name` is not scanned again by a
//! later `post-install-cmd`:
//!
//! ```bash
//! vendor-harden hook post-package-install:twig/twig post-install-cmd post-autoload-dump
//! ```

use anyhow::Result;
use clap::Args;

use super::common::CommandContext;
use crate::hooks::{EventInvocation, Session};

/// Command to dispatch lifecycle events.
#[derive(Args, Debug)]
pub struct HookCommand {
    /// Events to run in order, as `event` or `event:vendor/name`
    #[arg(value_name = "EVENT[:PACKAGE]", required = true)]
    pub events: Vec<String>,
}

impl HookCommand {
    /// Execute the hook command.
    ///
    /// Every event is parsed before any of them runs, so a typo in the last one
    /// does not leave the first half applied.
    ///
    /// # Errors
    ///
    /// Fails on unknown events, per-package events without a package, and
    /// systemic failures of an action.
    pub async fn execute(self, ctx: CommandContext) -> Result<()> {
        let invocations = self
            .events
            .iter()
            .map(|event| event.parse::<EventInvocation>())
            .collect::<Result<Vec<_>, _>>()?;

        let (cleaner, vendor_dir) = ctx.into_cleaner();
        let mut session = Session::new(cleaner, vendor_dir);

        for invocation in &invocations {
            session.dispatch(invocation).await?;
        }

        tracing::debug!(
            "Session finished; {} package(s) in ledger",
            session.cleaner().ledger().len()
        );
        Ok(())
    }
}
