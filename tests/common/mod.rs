//! Common helpers for vendor-harden integration tests

// Not every helper is used by every test file
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

use vendor_harden_cli::constants::{COMPOSER_VENDOR_DIR_ENV_VAR, CONFIG_ENV_VAR};
use vendor_harden_cli::test_utils::VendorFixture;

/// `vendor-harden` running in `project_dir`, isolated from the caller's
/// environment and without colour.
pub fn vendor_harden(project_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vendor-harden").unwrap();
    cmd.current_dir(project_dir)
        .env_remove(COMPOSER_VENDOR_DIR_ENV_VAR)
        .env_remove(CONFIG_ENV_VAR)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Fixture with a few well-known packages installed.
///
/// - `twig/twig`: `doc`, `tests` (both in the built-in table)
/// - `symfony/console`: `Tests` (built-in)
/// - `acme/widgets`: `docs`, `examples` (unknown to the built-in table)
pub fn standard_fixture() -> VendorFixture {
    let mut fixture = VendorFixture::new().unwrap();
    fixture
        .add_package("twig/twig", &["doc", "tests"])
        .unwrap()
        .add_package("symfony/console", &["Tests"])
        .unwrap()
        .add_package("acme/widgets", &["docs", "examples"])
        .unwrap();
    fixture.write_installed_json().unwrap();
    fixture
}
