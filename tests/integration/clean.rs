//! Tests for the clean command.

use predicates::prelude::*;

use super::common::{standard_fixture, vendor_harden};
use vendor_harden_cli::test_utils::VendorFixture;

#[test]
fn test_clean_all_installed_packages() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleaning vendor directory."))
        .stderr(predicate::str::contains("Cleaning directories in twig/twig package."));

    assert!(!fixture.path("twig/twig", "doc").exists());
    assert!(!fixture.path("twig/twig", "tests").exists());
    assert!(!fixture.path("symfony/console", "Tests").exists());
    assert!(fixture.path("twig/twig", "src").exists());
    // Not in the built-in table
    assert!(fixture.path("acme/widgets", "docs").exists());
}

#[test]
fn test_second_run_reports_clean() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir()).arg("clean").assert().success();

    // A new process has a new ledger, but nothing is left to remove
    vendor_harden(fixture.project_dir())
        .args(["-v", "clean"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed").not());
}

#[test]
fn test_clean_named_packages() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["clean", "Twig/Twig"])
        .assert()
        .success();

    assert!(!fixture.path("twig/twig", "doc").exists());
    assert!(fixture.path("symfony/console", "Tests").exists());
}

#[test]
fn test_verbose_lists_paths() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["-v", "clean", "twig/twig"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 'doc'."))
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn test_very_verbose_lists_absent_paths() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["-vv", "clean", "twig/twig"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory 'ext' not found."));
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["-q", "clean"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_nothing_to_do() {
    let mut fixture = VendorFixture::new().unwrap();
    fixture.add_package("acme/unknown", &["docs"]).unwrap();
    fixture.write_installed_json().unwrap();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("Vendor directory already clean."));
}

#[test]
fn test_missing_registry_fails() {
    let fixture = VendorFixture::new().unwrap();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("installed.json"));
}

#[test]
fn test_relocated_vendor_dir() {
    let fixture = standard_fixture();
    let relocated = fixture.project_dir().join("lib");
    std::fs::create_dir_all(&relocated).unwrap();
    std::fs::rename(fixture.vendor_dir(), relocated.join("deps")).unwrap();

    vendor_harden(fixture.project_dir())
        .env("COMPOSER_VENDOR_DIR", "lib/deps")
        .arg("clean")
        .assert()
        .success();

    assert!(!relocated.join("deps/twig/twig/doc").exists());
}

#[test]
fn test_binaries_survive_cleanup() {
    let mut fixture = VendorFixture::new().unwrap();
    fixture.add_package_with_binaries("acme/tool", &["docs"], &["bin/tool"]).unwrap();
    fixture.write_installed_json().unwrap();
    fixture.write_project_config("[extend]\n\"acme/tool\" = [\"bin\", \"docs\"]\n").unwrap();

    vendor_harden(fixture.project_dir()).arg("clean").assert().success();

    assert!(fixture.path("acme/tool", "bin/tool").exists());
    assert!(!fixture.path("acme/tool", "docs").exists());
}

#[test]
fn test_package_root_entry_is_rejected() {
    let fixture = standard_fixture();
    fixture.write_project_config("[extend]\n\"twig/twig\" = [\"./.\"]\n").unwrap();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("resolves to the package directory"));

    assert!(fixture.path("twig/twig", "src").exists());
    assert!(fixture.path("twig/twig", "doc").exists());
}
