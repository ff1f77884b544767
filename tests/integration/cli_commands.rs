//! Integration tests for the `sortrace` binary

use assert_cmd::Command;
use predicates::prelude::*;
use sortrace::Trace;
use tempfile::TempDir;

/// Command with an isolated data directory so tests never touch ~/.sortrace
fn sortrace(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortrace").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_list_shows_every_algorithm() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("selection"))
        .stdout(predicate::str::contains("Cocktail Shaker Sort"));
}

#[test]
fn test_run_summary_prints_sorted_values() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir)
        .args(["run", "bubble", "--values", "5,3,1", "--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 3, 5]"));
}

#[test]
fn test_run_json_decodes_as_trace() {
    let dir = TempDir::new().unwrap();
    let output = sortrace(&dir)
        .args(["run", "counting", "--values", "-3,1,-1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let trace: Trace = serde_json::from_value(value["trace"].clone()).unwrap();
    assert_eq!(trace.final_state(), &[-3, -1, 1]);
    assert_eq!(value["input"], serde_json::json!([-3, 1, -1]));
}

#[test]
fn test_radix_rejects_negative_input() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir)
        .args(["run", "radix", "--values", "-1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir)
        .args(["run", "bogo", "--values", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
}

#[test]
fn test_all_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = sortrace(&dir)
        .args(["all", "--size", "12", "--seed", "99"])
        .output()
        .unwrap();
    let second = sortrace(&dir)
        .args(["all", "--size", "12", "--seed", "99"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 11);
}

#[test]
fn test_replay_prints_frames() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir)
        .args(["replay", "selection", "--values", "2,1", "--interval-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial array"))
        .stdout(predicate::str::contains("Selection Sort completed"));
}

#[test]
fn test_first_run_writes_example_config() {
    let dir = TempDir::new().unwrap();
    sortrace(&dir).arg("list").assert().success();
    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert_eq!(written, sortrace::config::EXAMPLE_CONFIG);
}
