//! Tests for the paths report.

use predicates::prelude::*;

use super::common::{standard_fixture, vendor_harden};

#[test]
fn test_paths_marks_installed_packages() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["paths", "twig/twig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration: built-in defaults"))
        .stdout(predicate::str::contains("twig/twig (installed)"))
        .stdout(predicate::str::contains("absent"));

    // Read-only
    assert!(fixture.path("twig/twig", "doc").exists());
}

#[test]
fn test_paths_installed_filter() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["paths", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("symfony/console (installed)"))
        .stdout(predicate::str::contains("phpunit/phpunit").not());
}

#[test]
fn test_paths_unconfigured_package() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["paths", "acme/widgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/widgets: no cleanup paths configured"));
}
