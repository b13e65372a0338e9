//! Tests for lifecycle event dispatch.

use predicates::prelude::*;

use super::common::{standard_fixture, vendor_harden};

#[test]
fn test_post_install_cmd_sweeps() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["hook", "post-install-cmd"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleaning vendor directory."));

    assert!(!fixture.path("twig/twig", "doc").exists());
    assert!(!fixture.path("symfony/console", "Tests").exists());
}

#[test]
fn test_package_event_then_sweep_in_one_session() {
    let fixture = standard_fixture();

    let assert = vendor_harden(fixture.project_dir())
        .args(["-vv", "hook", "post-package-update:twig/twig", "post-update-cmd"])
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    // twig/twig is handled by the package event only
    assert_eq!(stderr.matches("Cleaning directories in twig/twig package.").count(), 1);
    assert!(stderr.contains("Cleaning directories in symfony/console package."));
}

#[test]
fn test_repeated_package_event_is_noop() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args([
            "-vv",
            "hook",
            "post-package-install:Twig/Twig",
            "post-package-install:twig/twig",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Package twig/twig already cleaned."));
}

#[test]
fn test_autoload_dump_protects_vendor() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["hook", "post-autoload-dump"])
        .assert()
        .success();

    assert!(fixture.vendor_dir().join(".htaccess").is_file());
    assert!(fixture.vendor_dir().join("web.config").is_file());
    // Marker files alone never clean anything
    assert!(fixture.path("twig/twig", "doc").exists());
}

#[test]
fn test_unknown_event_fails() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["hook", "pre-install-cmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown lifecycle event: pre-install-cmd"))
        .stderr(predicate::str::contains("post-autoload-dump"));
}

#[test]
fn test_package_event_without_package_fails() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["hook", "post-install-cmd", "post-package-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a package name"));

    // Parsing happens before anything runs
    assert!(fixture.path("twig/twig", "doc").exists());
}
