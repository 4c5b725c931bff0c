//! CLI surface tests for the npm_dist_release binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_workflow() {
    let mut cmd = Command::cargo_bin("npm_dist_release").expect("binary built");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("PROJECT_ROOT"));
}

#[test]
fn rejects_nonexistent_project_root() {
    let mut cmd = Command::cargo_bin("npm_dist_release").expect("binary built");
    cmd.arg("/no/such/dir/anywhere")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let mut cmd = Command::cargo_bin("npm_dist_release").expect("binary built");
    cmd.args(["--verbose", "--quiet"]).assert().failure();
}
