//! Tests for project configuration sources.

use predicates::prelude::*;

use super::common::{standard_fixture, vendor_harden};

#[test]
fn test_extend_and_ignore_from_toml() {
    let fixture = standard_fixture();
    fixture
        .write_project_config(
            r#"
[extend]
"acme/widgets" = ["examples"]

[ignore]
packages = ["symfony/console"]

[ignore.paths]
"twig/twig" = ["doc"]
"#,
        )
        .unwrap();

    vendor_harden(fixture.project_dir()).arg("clean").assert().success();

    assert!(!fixture.path("acme/widgets", "examples").exists());
    assert!(fixture.path("acme/widgets", "docs").exists());
    assert!(fixture.path("symfony/console", "Tests").exists());
    assert!(fixture.path("twig/twig", "doc").exists());
    assert!(!fixture.path("twig/twig", "tests").exists());
}

#[test]
fn test_config_from_composer_extra() {
    let fixture = standard_fixture();
    fixture
        .write_composer_json(
            r#"{
                "name": "acme/site",
                "extra": {
                    "vendor-hardening": {
                        "extend": { "acme/widgets": ["docs"] }
                    }
                }
            }"#,
        )
        .unwrap();

    vendor_harden(fixture.project_dir())
        .args(["paths", "acme/widgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("composer.json"))
        .stdout(predicate::str::contains("docs"));
}

#[test]
fn test_explicit_config_from_env() {
    let fixture = standard_fixture();
    std::fs::write(
        fixture.project_dir().join("hardening.toml"),
        "[ignore]\npackages = [\"twig/twig\"]\n",
    )
    .unwrap();

    vendor_harden(fixture.project_dir())
        .env("VENDOR_HARDEN_CONFIG", "hardening.toml")
        .arg("clean")
        .assert()
        .success();

    assert!(fixture.path("twig/twig", "doc").exists());
    assert!(!fixture.path("symfony/console", "Tests").exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let fixture = standard_fixture();

    vendor_harden(fixture.project_dir())
        .args(["--config", "nope.toml", "clean"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unsafe_path_is_rejected() {
    let fixture = standard_fixture();
    fixture.write_project_config("[extend]\n\"acme/widgets\" = [\"../../etc\"]\n").unwrap();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cleanup path '../../etc'"));

    assert!(fixture.path("twig/twig", "doc").exists());
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let fixture = standard_fixture();
    fixture.write_project_config("[remove]\n\"twig/twig\" = [\"doc\"]\n").unwrap();

    vendor_harden(fixture.project_dir())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration in"));
}
