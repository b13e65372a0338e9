//! Test utilities for vendor-harden
//!
//! Available to the crate's own unit tests and, through the `test-utils`
//! feature, to the integration tests under `tests/`.
//!
//! - [`init_test_logging`] - tracing output for tests, initialised once
//! - [`VendorFixture`] - a throwaway project with a fake vendor tree and
//!   `installed.json`
//! - [`MemoryRepository`] - an in-memory [`crate::registry::PackageRepository`]
//!
//! # Example
//!
//! ```rust,no_run
//! use vendor_harden_cli::test_utils::VendorFixture;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut fixture = VendorFixture::new()?;
//! fixture.add_package("twig/twig", &["doc", "src"])?;
//! fixture.write_installed_json()?;
//! assert!(fixture.path("twig/twig", "doc").exists());
//! # Ok(())
//! # }
//! ```

pub mod fixtures;
pub mod repository;

pub use fixtures::VendorFixture;
pub use repository::MemoryRepository;

use std::collections::BTreeMap;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{CleanupConfig, IgnoreConfig, merge_cleanup_paths};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, tests stay
/// silent. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Build a [`CleanupConfig`] directly from `(package, paths)` pairs, with no
/// built-in defaults.
pub fn cleanup_config(entries: &[(&str, &[&str])]) -> CleanupConfig {
    let table: BTreeMap<String, Vec<String>> = entries
        .iter()
        .map(|(name, paths)| {
            ((*name).to_string(), paths.iter().map(|path| (*path).to_string()).collect())
        })
        .collect();

    merge_cleanup_paths(&table, &BTreeMap::new(), &IgnoreConfig::default())
}
