//! Tests against the compiled `akc` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn akc(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("akc").unwrap();
    cmd.env("HOME", home)
        .env_remove("AKC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_config_points_at_init() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("absent.json");

    akc(home.path())
        .env("AKC_CONFIG", &path)
        .args(["application", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Config file not found"))
        .stdout(predicate::str::contains("akc init"));
}

#[test]
fn default_config_lives_in_home() {
    let home = TempDir::new().unwrap();

    akc(home.path())
        .args(["user", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(".akc_config.json"));
}

#[test]
fn init_with_flags_writes_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.json");

    akc(home.path())
        .args(["init", "--url", "https://auth.example.com"])
        .args(["--token", "secret"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config saved to"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["base_url"], "https://auth.example.com");
    assert_eq!(saved["api_token"], "secret");
}

#[test]
fn malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    akc(home.path())
        .arg("--config")
        .arg(&path)
        .args(["flow", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("configuration error"));
}

#[test]
fn unreachable_server_is_a_connection_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"base_url": "http://127.0.0.1:9", "api_token": "secret"}"#,
    )
    .unwrap();

    akc(home.path())
        .env("AKC_CONFIG", &path)
        .args(["core", "get-version"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("connection error"));
}

#[test]
fn usage_errors_exit_with_two() {
    let home = TempDir::new().unwrap();

    akc(home.path())
        .args(["application", "frobnicate"])
        .assert()
        .code(2);
}

#[test]
fn conflicting_flags_are_rejected() {
    let home = TempDir::new().unwrap();

    akc(home.path())
        .args(["user", "update", "jane", "--is-active", "--not-active"])
        .assert()
        .code(2);
}
