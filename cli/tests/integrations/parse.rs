use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_parse_literals() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["parse", "4g", "1300kb", "512mb"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4g = 4096 MiB"))
        .stdout(predicate::str::contains("1300kb = 1 MiB"))
        .stdout(predicate::str::contains("512mb = 512 MiB"));
}

#[test]
fn test_cli_parse_requires_unit_suffix() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["parse", "2048"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse size literal '2048'"));
}

#[test]
fn test_cli_parse_malformed_non_ascii_literal() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["parse", "--", "4é"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse size literal '4é'"))
        .stderr(predicate::str::contains("not a size literal"));
}

#[test]
fn test_cli_parse_negative_literal() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["parse", "--", "-4MB"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-4MB = -4 MiB"));
}

#[test]
fn test_cli_parse_malformed_literal() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.args(["parse", "4zb"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse size literal '4zb'"));
}

#[test]
fn test_cli_parse_requires_a_literal() {
    let mut cmd = Command::cargo_bin("limits").unwrap();
    cmd.arg("parse");

    cmd.assert().failure();
}
