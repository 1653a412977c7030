//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `iriscope` binary to verify that
//! argument parsing, prediction output, and error handling work
//! end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("iriscope").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iriscope"));
}

// ---------------------------------------------------------------------------
// Predict subcommand
// ---------------------------------------------------------------------------

#[test]
fn predict_missing_measurements_errors() {
    cmd().arg("predict").assert().failure();
}

#[test]
fn predict_non_numeric_measurement_errors() {
    cmd()
        .args([
            "predict",
            "--sepal-length",
            "abc",
            "--sepal-width",
            "3.4",
            "--petal-length",
            "1.3",
            "--petal-width",
            "0.2",
        ])
        .assert()
        .failure();
}

#[test]
fn predict_negative_measurement_is_rejected() {
    cmd()
        .args([
            "predict",
            "--sepal-length",
            "-1.0",
            "--sepal-width",
            "3.4",
            "--petal-length",
            "1.3",
            "--petal-width",
            "0.2",
            "--no-report",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn predict_setosa_specimen() {
    cmd()
        .args([
            "predict",
            "--sepal-length",
            "5.4",
            "--sepal-width",
            "3.4",
            "--petal-length",
            "1.3",
            "--petal-width",
            "0.2",
            "--no-report",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("predicted_species\tsetosa"))
        .stdout(predicate::str::contains("confidence"))
        .stdout(predicate::str::contains("p(versicolor)"));
}

#[test]
fn predict_virginica_specimen() {
    cmd()
        .args([
            "predict",
            "--sepal-length",
            "6.5",
            "--sepal-width",
            "3.0",
            "--petal-length",
            "5.2",
            "--petal-width",
            "2.0",
            "--no-report",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("predicted_species\tvirginica"));
}

#[test]
fn predict_writes_html_report() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.html");

    cmd()
        .args([
            "predict",
            "--sepal-length",
            "5.4",
            "--sepal-width",
            "3.4",
            "--petal-length",
            "1.3",
            "--petal-width",
            "0.2",
            "-o",
        ])
        .arg(&report_path)
        .assert()
        .success();

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Species Probability Distribution"));
    assert!(report.contains("setosa"));
}

#[test]
fn predict_nonexistent_config_errors() {
    cmd()
        .args([
            "predict",
            "--sepal-length",
            "5.4",
            "--sepal-width",
            "3.4",
            "--petal-length",
            "1.3",
            "--petal-width",
            "0.2",
            "/nonexistent/config.json",
        ])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Info subcommand
// ---------------------------------------------------------------------------

#[test]
fn info_prints_dataset_summary() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("150 samples"))
        .stdout(predicate::str::contains("setosa"))
        .stdout(predicate::str::contains("virginica"));
}
