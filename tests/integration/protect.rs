//! Tests for the protect command.

use predicates::prelude::*;

use super::common::vendor_harden;
use vendor_harden_cli::access::{HTACCESS_CONTENT, WEB_CONFIG_CONTENT};
use vendor_harden_cli::test_utils::VendorFixture;

#[test]
fn test_protect_writes_marker_files() {
    let fixture = VendorFixture::new().unwrap();

    vendor_harden(fixture.project_dir())
        .arg("protect")
        .assert()
        .success()
        .stderr(predicate::str::contains("Access restriction files written"));

    let htaccess = std::fs::read_to_string(fixture.vendor_dir().join(".htaccess")).unwrap();
    let web_config = std::fs::read_to_string(fixture.vendor_dir().join("web.config")).unwrap();
    assert_eq!(htaccess, HTACCESS_CONTENT);
    assert_eq!(web_config, WEB_CONFIG_CONTENT);
}

#[test]
fn test_protect_twice_is_byte_identical() {
    let fixture = VendorFixture::new().unwrap();

    vendor_harden(fixture.project_dir()).arg("protect").assert().success();
    let first = std::fs::read(fixture.vendor_dir().join(".htaccess")).unwrap();

    vendor_harden(fixture.project_dir()).arg("protect").assert().success();
    let second = std::fs::read(fixture.vendor_dir().join(".htaccess")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_protect_explicit_vendor_dir() {
    let fixture = VendorFixture::new().unwrap();

    vendor_harden(fixture.project_dir())
        .args(["protect", "--vendor-dir", "web/libraries"])
        .assert()
        .success();

    assert!(fixture.project_dir().join("web/libraries/.htaccess").is_file());
}

#[test]
fn test_protect_does_not_need_registry() {
    let fixture = VendorFixture::new().unwrap();
    std::fs::remove_dir_all(fixture.vendor_dir()).unwrap();

    vendor_harden(fixture.project_dir()).arg("protect").assert().success();

    assert!(fixture.vendor_dir().join("web.config").is_file());
}
