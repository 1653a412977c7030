//! CLI prediction helpers: configuration, the predict run itself, and
//! the stdout/HTML writers.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use maud::{html, PreEscaped};
use serde::{Deserialize, Serialize};

use iriscope_classifiers::config::ModelConfig;
use iriscope_classifiers::dataset::FEATURE_NAMES;
use iriscope_classifiers::predictor::{IrisPredictor, Sample};
use iriscope_classifiers::report::plots::plot_probability_bar;
use iriscope_classifiers::report::report::{Report, ReportSection};

use crate::assets::{species_image, DEFAULT_IMAGE_DIR};

const MAIN_CSS: &str = include_str!("../../assets/main.css");

/// Parameters for running a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictConfig {
    pub model: ModelConfig,
    pub report: bool,
    pub report_path: PathBuf,
    pub image_dir: PathBuf,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            report: true,
            report_path: PathBuf::from("iriscope_report.html"),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
        }
    }
}

/// Outcome of classifying one specimen.
#[derive(Debug)]
pub struct PredictOutcome {
    pub class_index: usize,
    pub species: String,
    /// Probability of the predicted class, in percent.
    pub confidence: f32,
    pub probabilities: Vec<f32>,
    pub target_names: &'static [&'static str; 3],
}

/// Load a prediction configuration from a JSON file.
pub fn load_predict_config<P: AsRef<Path>>(path: P) -> Result<PredictConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PredictConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Run the predictor on one sample.
pub fn run_predict(sample: &Sample, config: &PredictConfig) -> Result<PredictOutcome> {
    let predictor = IrisPredictor::with_config(config.model.clone());

    let probabilities = predictor
        .predict_proba(sample)
        .context("Failed to compute class probabilities")?;
    let class_index = predictor.predict(sample).context("Failed to classify sample")?;

    let target_names = predictor.target_names();
    let species = target_names[class_index].to_string();
    let confidence = probabilities[class_index] * 100.0;

    log::info!("classified sample as '{}' ({:.1}%)", species, confidence);

    Ok(PredictOutcome {
        class_index,
        species,
        confidence,
        probabilities,
        target_names,
    })
}

/// Print the prediction to stdout as tab-separated key/value lines.
pub fn write_prediction_output(outcome: &PredictOutcome) {
    println!("predicted_species\t{}", outcome.species);
    println!("confidence\t{:.1}%", outcome.confidence);
    for (name, probability) in outcome.target_names.iter().zip(&outcome.probabilities) {
        println!("p({})\t{:.4}", name, probability);
    }
}

/// Assemble and write the HTML prediction report.
pub fn write_prediction_report(
    sample: &Sample,
    outcome: &PredictOutcome,
    config: &PredictConfig,
) -> Result<()> {
    let mut report = Report::new(
        "Iriscope",
        env!("CARGO_PKG_VERSION"),
        None,
        "Iris Species Prediction Report",
    );
    report.set_css(MAIN_CSS);

    /* Section 1: Classification snapshot */
    {
        let mut section = ReportSection::new("Classification Snapshot");

        section.add_content(html! {
            p {
                "Based on the provided measurements, the ensemble has identified "
                "this specimen as the species highlighted below."
            }
            div class="metric" {
                span class="metric-label" { "Predicted Species" }
                span class="metric-value" { (outcome.species) }
            }
            div class="metric" {
                span class="metric-label" { "Confidence Level" }
                span class="metric-value" { (format!("{:.1}%", outcome.confidence)) }
            }
        });

        if let Some(image) = species_image(&config.image_dir, &outcome.species) {
            section.add_content(html! {
                img class="species-image" src=(image.display().to_string()) alt=(outcome.species);
            });
        }

        report.add_section(section);
    }

    /* Section 2: Probability distribution */
    {
        let mut section = ReportSection::new("Species Probability Distribution");

        section.add_content(html! {
            p {
                "Prediction probability represents the likelihood of the model's "
                "classification being correct, ranging from 0 to 1. One entry per "
                "species, index-aligned with the class labels."
            }
        });

        let plot = plot_probability_bar(
            &outcome.probabilities,
            outcome.target_names.as_slice(),
            "Species Probability Distribution",
        )
        .map_err(anyhow::Error::msg)?;
        section.add_plot(plot);

        report.add_section(section);
    }

    /* Section 3: Input and configuration */
    {
        let mut section = ReportSection::new("Input Measurements");

        let features = sample.to_features();
        section.add_content(html! {
            table class="measurements" {
                tr { th { "Feature" } th { "Value (cm)" } }
                @for (name, value) in FEATURE_NAMES.iter().zip(features) {
                    tr { td { (name) } td { (format!("{:.1}", value)) } }
                }
            }
        });

        section.add_content(html! {
            div class="code-container" {
                pre {
                    code { (PreEscaped(serde_json::to_string_pretty(&config)?)) }
                }
            }
        });

        report.add_section(section);
    }

    report.save_to_file(&config.report_path)
}
