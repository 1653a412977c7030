//! iriscope-classifiers: Iris species classification helpers.
//!
//! This crate provides the bundled 150-row Iris reference dataset, a
//! gradient-boosted ensemble classifier behind a small model trait, the
//! `IrisPredictor` wrapper used by the CLI, and reporting/plotting
//! helpers for the HTML prediction report.
//!
//! The design favors small, testable modules: the dataset is embedded in
//! the crate and memoized process-wide, and training happens at most once
//! per predictor behind a one-time-initialization guard.
pub mod config;
pub mod dataset;
pub mod error;
pub mod math;
pub mod models;
pub mod predictor;
pub mod report;
