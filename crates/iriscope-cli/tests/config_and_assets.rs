//! Integration tests for the predict configuration and asset helpers.

use std::path::PathBuf;

use iriscope_cli::assets::species_image;
use iriscope_cli::commands::predict::{load_predict_config, PredictConfig};

// ---------------------------------------------------------------------------
// PredictConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn predict_config_default_values() {
    let cfg = PredictConfig::default();
    assert!(cfg.report);
    assert_eq!(cfg.report_path, PathBuf::from("iriscope_report.html"));
    assert_eq!(cfg.image_dir, PathBuf::from("assets/images"));
    assert!(cfg.model.learning_rate > 0.0);
}

#[test]
fn predict_config_serializes_to_json() {
    let cfg = PredictConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("learning_rate"));
    assert!(json.contains("report_path"));
}

#[test]
fn predict_config_round_trips_json() {
    let cfg = PredictConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: PredictConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg.report, cfg2.report);
    assert_eq!(cfg.report_path, cfg2.report_path);
}

#[test]
fn predict_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("predict_config.json");
    let json = serde_json::to_string_pretty(&PredictConfig::default()).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded = load_predict_config(&path).unwrap();
    assert!(loaded.report);
}

#[test]
fn predict_config_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("predict_config.json");
    std::fs::write(&path, r#"{"report": false}"#).unwrap();

    let loaded = load_predict_config(&path).unwrap();
    assert!(!loaded.report);
    assert_eq!(loaded.report_path, PathBuf::from("iriscope_report.html"));
}

#[test]
fn predict_config_nonexistent_file_errors() {
    assert!(load_predict_config("/nonexistent/predict_config.json").is_err());
}

// ---------------------------------------------------------------------------
// Species image lookup
// ---------------------------------------------------------------------------

#[test]
fn species_image_prefers_specific_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("setosa.png"), b"png").unwrap();
    std::fs::write(dir.path().join("iris.jpg"), b"jpg").unwrap();

    let found = species_image(dir.path(), "setosa").unwrap();
    assert_eq!(found, dir.path().join("setosa.png"));
}

#[test]
fn species_image_falls_back_to_generic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("iris.jpg"), b"jpg").unwrap();

    let found = species_image(dir.path(), "virginica").unwrap();
    assert_eq!(found, dir.path().join("iris.jpg"));
}

#[test]
fn species_image_missing_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(species_image(dir.path(), "versicolor").is_none());
}

#[test]
fn species_image_lowercases_name() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("versicolor.png"), b"png").unwrap();

    let found = species_image(dir.path(), "Versicolor").unwrap();
    assert_eq!(found, dir.path().join("versicolor.png"));
}
