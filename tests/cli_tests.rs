//! Command-line behavior that does not need a terminal

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with HOME pointed at an empty directory so no user config leaks in
fn promptdeck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("promptdeck").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_help_lists_flags() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--conversation"))
        .stdout(predicate::str::contains("--no-suggest"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_model_is_rejected() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .args(["--model", "gpt-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("openai"));
}

#[test]
fn test_save_api_key_requires_api_key() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .arg("--save-api-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

#[test]
fn test_conversation_conflicts_with_import() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .args(["--conversation", "3", "--import", "chat.json"])
        .assert()
        .failure();
}

#[test]
fn test_missing_import_file_fails_before_ui() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.json");
    promptdeck(&home)
        .arg("--import")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_import_file_fails_before_ui() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("broken.json");
    fs::write(&file, "{ not json").unwrap();

    promptdeck(&home)
        .arg("--import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transcript file"));
}

#[test]
fn test_invalid_base_url_fails_before_ui() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .args(["--base-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base URL"));
}

#[test]
fn test_non_http_base_url_fails_before_ui() {
    let home = TempDir::new().unwrap();
    promptdeck(&home)
        .args(["--base-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http(s)"));
}
