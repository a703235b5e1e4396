//! Command-line interface checks.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_options() {
    Command::cargo_bin("plotpad")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--no-autoscale"));
}

#[test]
fn unknown_theme_is_rejected() {
    Command::cargo_bin("plotpad")
        .unwrap()
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("solarized"));
}
