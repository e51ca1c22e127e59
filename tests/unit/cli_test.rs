//! Integration tests for the vulsconf CLI

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn vulsconf() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("vulsconf"))
}

fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

const VALID: &str = r##"
cve_dictionary_url = "http://127.0.0.1:1323"

[servers.web01]
host = "192.168.0.10"
user = "vuls"

[servers.self]
host = "localhost"

[slack]
hook_url = "https://hooks.slack.com/services/abc/def"
channel = "general"
auth_user = "vuls"
"##;

#[test]
fn test_version() {
    vulsconf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vulsconf"));
}

#[test]
fn test_help() {
    vulsconf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Every violation is reported at once"));
}

#[test]
fn test_no_args_shows_info() {
    vulsconf().assert().success().stdout(predicate::str::contains("vulsconf"));
}

#[test]
fn test_validate_passes_with_slack_disabled() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, VALID);

    vulsconf()
        .args(["validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings are valid."));
}

#[test]
fn test_validate_fails_with_slack_enabled() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, VALID);

    vulsconf()
        .args(["validate", "--slack", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("channel's prefix must be '#', channel: general"))
        .stdout(predicate::str::contains("INVALID: 1 violation(s)"));
}

#[test]
fn test_validate_json() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "json_base_dir = \"results\"\n");

    vulsconf()
        .args(["--json", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"field\": \"json_base_dir\""));
}

#[test]
fn test_validate_missing_file() {
    let temp = TempDir::new().unwrap();

    vulsconf()
        .args(["validate", "--config"])
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_servers_lists_profiles() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, VALID);

    vulsconf()
        .args(["servers", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("self (local)"))
        .stdout(predicate::str::contains("vuls@192.168.0.10:22"));
}
