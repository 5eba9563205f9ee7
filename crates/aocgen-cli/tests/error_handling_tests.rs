//! Tests for fatal diagnostics: the two argument errors and the guarantee
//! that neither performs any filesystem writes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn aocgen() -> Command {
    let mut cmd = Command::cargo_bin("aocgen").unwrap();
    cmd.env_remove("AOCGEN_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn dir_is_empty(path: &std::path::Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn missing_argument_is_fatal() {
    let temp = TempDir::new().unwrap();

    aocgen()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing argument DAY"));

    assert!(dir_is_empty(temp.path()), "missing DAY must not write files");
}

#[test]
fn non_numeric_argument_is_fatal() {
    let temp = TempDir::new().unwrap();

    aocgen()
        .current_dir(temp.path())
        .arg("day5")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid argument DAY: day5"));

    assert!(dir_is_empty(temp.path()), "invalid DAY must not write files");
}

#[test]
fn float_argument_is_fatal() {
    let temp = TempDir::new().unwrap();

    aocgen()
        .current_dir(temp.path())
        .arg("5.0")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid argument DAY: 5.0"));

    assert!(dir_is_empty(temp.path()));
}

#[test]
fn diagnostics_carry_suggestions() {
    aocgen()
        .arg("twelve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("base-10"));
}

#[test]
fn bad_layout_in_config_is_fatal_before_any_write() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".aocgen.toml"),
        "[layout]\npuzzles_dir = \"/absolute\"\ninput_dir = \"input\"\n",
    )
    .unwrap();

    aocgen()
        .current_dir(temp.path())
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid layout"));

    // Only the config file we seeded is present; nothing was generated.
    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(".aocgen.toml")]);
}

#[test]
fn explicit_config_file_must_exist() {
    let temp = TempDir::new().unwrap();

    aocgen()
        .current_dir(temp.path())
        .args(["3", "--config", "nope.toml"])
        .assert()
        .failure()
        .code(4);

    assert!(dir_is_empty(temp.path()));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    aocgen().args(["3", "--frobnicate"]).assert().failure().code(2);
}
