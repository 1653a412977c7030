//! Dataset summary command.
use anyhow::{Context, Result};

use iriscope_classifiers::dataset::{self, FEATURE_NAMES, TARGET_NAMES};

/// Print a summary of the bundled reference dataset.
pub fn print_dataset_summary() -> Result<()> {
    let data = dataset::load().context("Failed to load the bundled reference dataset")?;

    let counts = data.class_counts();
    let means = data.feature_means();

    println!("----- Reference Dataset Summary -----");
    println!(
        "Info: {} samples, {} features",
        data.n_samples(),
        FEATURE_NAMES.len()
    );
    for (name, count) in TARGET_NAMES.iter().zip(counts) {
        println!("Info: {:<12} {} samples", name, count);
    }
    for (name, mean) in FEATURE_NAMES.iter().zip(means) {
        println!("Info: mean {:<13} {:.2} cm", name, mean);
    }
    println!("-------------------------------------");

    Ok(())
}
