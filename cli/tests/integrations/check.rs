use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_check_prints_canonical_json() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "-m", "4g", "-c", "3"]);

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"categorization_examples_limit":3,"model_memory_limit":4096}"#,
    ));
}

#[test]
fn test_cli_check_plain_integer_is_mebibytes() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "-m", "2048"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"model_memory_limit":2048}"#));
}

#[test]
fn test_cli_check_plain_zero_is_too_low() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "-m", "0"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "model_memory_limit must be at least 1 MiB. Value = 0",
    ));
}

#[test]
fn test_cli_check_without_limits() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("check");

    cmd.assert().success().stdout(predicate::str::contains("{}"));
}

#[test]
fn test_cli_check_memory_too_low() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "--model-memory-limit", "1000Kb"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "model_memory_limit must be at least 1 MiB. Value = 0",
    ));
}

#[test]
fn test_cli_check_negative_examples_limit() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "--categorization-examples-limit", "-1"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "categorization_examples_limit cannot be less than 0. Value = -1",
    ));
}

#[test]
fn test_cli_check_table() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["check", "-m", "512", "--table"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("model_memory_limit"))
        .stdout(predicate::str::contains("512 MiB"))
        .stdout(predicate::str::contains("(default)"));
}
