//! vendor-harden - Composer vendor directory hardening
//!
//! Runs as a Composer lifecycle hook. After dependencies are installed or
//! updated it removes non-runtime directories (tests, docs, examples, CI
//! fixtures) from installed packages, and after the autoloader is regenerated
//! it writes `.htaccess` and `web.config` files denying web access to the
//! vendor directory.
//!
//! # Architecture Overview
//!
//! Composer stays the authority on what is installed: vendor-harden reads
//! `vendor/composer/installed.json` and never resolves, downloads or
//! autoloads anything itself.
//!
//! - A built-in table maps well-known packages to paths that are safe to
//!   delete; projects `extend` it and `ignore` packages or single paths.
//! - One [`cleaner::VendorCleaner`] lives for one command invocation. Its
//!   ledger guarantees that each package is attempted at most once, even when
//!   both a per-package event and a post-command sweep fire for it.
//! - Failing to remove one path never stops the batch; only an unreadable
//!   registry or invalid configuration fails the command.
//!
//! # Core Modules
//!
//! - [`config`] - Built-in cleanup table, project overrides, vendor dir lookup
//! - [`registry`] - Installed package registry adapter
//! - [`cleaner`] - Cleanup orchestration and the per-run ledger
//! - [`access`] - Access restriction marker files
//! - [`hooks`] - Lifecycle events and their registration table
//! - [`cli`] - Command-line interface
//!
//! ## Supporting Modules
//!
//! - [`core`] - Package identifiers, errors, status reporting
//! - [`utils`] - Path removal, atomic writes, platform helpers
//! - [`constants`] - File names and environment variables
//!
//! # Project Configuration (vendor-harden.toml)
//!
//! ```toml
//! # Add paths for packages the built-in table does not know
//! [extend]
//! "acme/widgets" = ["docs", "examples"]
//!
//! [ignore]
//! # Never touch these packages
//! packages = ["phpunit/phpunit"]
//!
//! # Keep single paths
//! [ignore.paths]
//! "twig/twig" = ["doc"]
//! ```
//!
//! # Composer Integration
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

pub mod access;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod hooks;
pub mod registry;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
