//! CLI integration tests driving the `mython` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn runs_a_source_file_and_prints_to_stdout() {
    let dir = tempdir();
    let path = dir.join("program.my");
    std::fs::write(&path, "x = 1\ny = 2\nprint x + y\n").unwrap();

    Command::cargo_bin("mython")
        .unwrap()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("3\n"));
}

#[test]
fn reads_source_from_stdin_when_file_is_dash() {
    Command::cargo_bin("mython")
        .unwrap()
        .arg("run")
        .arg("-")
        .write_stdin("print \"hi\"\n")
        .assert()
        .success()
        .stdout(predicate::eq("hi\n"));
}

#[test]
fn exits_nonzero_and_reports_a_source_span_on_error() {
    Command::cargo_bin("mython")
        .unwrap()
        .arg("run")
        .arg("-")
        .write_stdin("print missing\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E_NAME"));
}

fn tempdir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("mython-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
