use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_validate_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a.json"),
        r#"{"model_memory_limit": "4g", "categorization_examples_limit": 4}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("b.json"), r#"{"model_memory_limit": 2048}"#).unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not json").unwrap();

    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("validate").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.json"))
        .stdout(predicate::str::contains("model_memory_limit=4096mb"))
        .stdout(predicate::str::contains("2 file(s) checked, 0 invalid"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_cli_validate_reports_invalid_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("good.json"), r#"{"model_memory_limit": 1}"#).unwrap();
    fs::write(
        temp_dir.path().join("bad.json"),
        r#"{"model_memory_limit": "-4MB"}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("validate").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(
            "model_memory_limit must be at least 1 MiB. Value = -4",
        ))
        .stdout(predicate::str::contains("2 file(s) checked, 1 invalid"))
        .stderr(predicate::str::contains("1 of 2 limits file(s) are invalid"));
}

#[test]
fn test_cli_validate_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("limits.json");
    fs::write(&file, r#"{"categorization_examples_limit": 0}"#).unwrap();

    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("validate").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("categorization_examples_limit=0"));
}

#[test]
fn test_cli_validate_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("validate").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No .json files found"));
}
