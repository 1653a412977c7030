//! The bundled Iris reference dataset.
//!
//! The 150-row table ships embedded in the crate and is parsed once per
//! process into a `OnceLock`; repeated loads return the same reference
//! and never re-read the asset. The table is immutable after load.
use std::sync::OnceLock;

use crate::error::DatasetError;
use crate::math::{Array1, Array2};

/// Feature columns, in training order. `Sample` measurements must follow
/// the same order.
pub const FEATURE_NAMES: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// Species display names, index-aligned with the class labels used by
/// the predictor.
pub const TARGET_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

pub const NUM_CLASSES: usize = TARGET_NAMES.len();

const RAW_CSV: &str = include_str!("../assets/iris.csv");

/// The fixed labeled reference set: one row per specimen, labels in
/// `0..NUM_CLASSES`.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    pub x: Array2<f32>,
    pub y: Array1<usize>,
}

static DATASET: OnceLock<IrisDataset> = OnceLock::new();

/// Species display names, index-aligned with `predict`/`predict_proba`.
pub fn target_names() -> &'static [&'static str; 3] {
    &TARGET_NAMES
}

/// Load the reference dataset, parsing the embedded asset on first call.
pub fn load() -> Result<&'static IrisDataset, DatasetError> {
    if let Some(data) = DATASET.get() {
        return Ok(data);
    }
    let parsed = parse_embedded()?;
    Ok(DATASET.get_or_init(|| parsed))
}

fn parse_embedded() -> Result<IrisDataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(RAW_CSV.as_bytes());

    let mut features = Vec::new();
    let mut labels = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // header occupies line 1
        let line = idx + 2;
        let record = result.map_err(|e| DatasetError::Parse {
            line,
            message: e.to_string(),
        })?;

        if record.len() != FEATURE_NAMES.len() + 1 {
            return Err(DatasetError::WrongArity {
                line,
                found: record.len(),
            });
        }

        for field in record.iter().take(FEATURE_NAMES.len()) {
            let value = field.trim().parse::<f32>().map_err(|e| DatasetError::Parse {
                line,
                message: format!("'{}': {}", field, e),
            })?;
            features.push(value);
        }

        let species = record.get(FEATURE_NAMES.len()).unwrap_or("").trim();
        let label = TARGET_NAMES
            .iter()
            .position(|name| *name == species)
            .ok_or_else(|| DatasetError::UnknownSpecies {
                line,
                species: species.to_string(),
            })?;
        labels.push(label);
    }

    let n_samples = labels.len();
    let x = Array2::from_shape_vec((n_samples, FEATURE_NAMES.len()), features).map_err(|e| {
        DatasetError::Parse {
            line: 0,
            message: e.to_string(),
        }
    })?;

    log::debug!("parsed reference dataset: {} samples", n_samples);

    Ok(IrisDataset {
        x,
        y: Array1::from_vec(labels),
    })
}

impl IrisDataset {
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Per-class row counts, index-aligned with `TARGET_NAMES`.
    pub fn class_counts(&self) -> [usize; NUM_CLASSES] {
        let mut counts = [0usize; NUM_CLASSES];
        for &label in self.y.iter() {
            counts[label] += 1;
        }
        counts
    }

    /// Per-feature means, index-aligned with `FEATURE_NAMES`.
    pub fn feature_means(&self) -> [f32; 4] {
        let mut means = [0.0f32; 4];
        for (col, mean) in means.iter_mut().enumerate() {
            let column = self.x.column(col);
            *mean = column.iter().sum::<f32>() / column.len() as f32;
        }
        means
    }
}
