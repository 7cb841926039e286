// Integration tests for the fairway CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the fairway binary.
fn fairway() -> Command {
    Command::cargo_bin("fairway").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    fairway()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fairway"));
}

#[test]
fn cli_help_flag() {
    fairway()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("handicap"));
}

#[test]
fn calc_without_a_file_falls_back_to_the_default_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    fairway()
        .current_dir(dir.path())
        .arg("calc")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rounds file not found"))
        .stderr(predicate::str::contains("rounds.toml"));
}

#[test]
fn add_requires_round_fields() {
    fairway()
        .args(["add", "rounds.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn plan_requires_current_target_and_months() {
    fairway()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_conflicts_with_quiet() {
    fairway()
        .args(["--verbose", "--quiet", "history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn calc_missing_file_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fairway()
        .arg("calc")
        .arg(dir.path().join("rounds.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rounds file not found"));
}

#[test]
fn rounds_missing_file_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fairway()
        .arg("rounds")
        .arg(dir.path().join("rounds.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rounds file not found"));
}

#[test]
fn history_with_no_records_reports_empty() {
    let dir = TempDir::new().expect("temp dir should be created");
    fairway()
        .arg("history")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no saved calculations"));
}
