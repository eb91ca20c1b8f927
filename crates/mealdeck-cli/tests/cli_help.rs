use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("mealdeck")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("mealdeck")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_auth_help_shows_subcommands() {
    cargo_bin_cmd!("mealdeck")
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("logout"));
}
