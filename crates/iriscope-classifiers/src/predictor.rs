//! The prediction wrapper around the ensemble classifier.
//!
//! `IrisPredictor` owns a classifier behind a one-time-initialization
//! guard: the first operation that needs a trained model loads the
//! memoized reference dataset and fits the ensemble exactly once, even
//! under concurrent first access. The trained model is read-only
//! afterwards and safe to share across threads.
use std::sync::OnceLock;

use crate::config::ModelConfig;
use crate::dataset::{self, FEATURE_NAMES, NUM_CLASSES};
use crate::error::PredictorError;
use crate::math::Array2;
use crate::models::classifier_trait::{argmax, ClassifierModel};
use crate::models::factory;

/// A single specimen: four measurements in centimeters, in the fixed
/// training feature order (`dataset::FEATURE_NAMES`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub sepal_length: f32,
    pub sepal_width: f32,
    pub petal_length: f32,
    pub petal_width: f32,
}

impl Sample {
    pub fn new(sepal_length: f32, sepal_width: f32, petal_length: f32, petal_width: f32) -> Self {
        Sample {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Measurements in training feature order.
    pub fn to_features(&self) -> [f32; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    /// Reject measurements the model was never fit to see: NaN,
    /// infinities, and negative lengths. The UI's suggested ranges are
    /// not enforced here.
    pub fn validate(&self) -> Result<(), PredictorError> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.to_features()) {
            if !value.is_finite() {
                return Err(PredictorError::InvalidSample(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(PredictorError::InvalidSample(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Predictor over the bundled reference dataset.
///
/// The untrained -> trained transition is one-way and never reset; every
/// fit uses the full fixed dataset.
pub struct IrisPredictor {
    config: ModelConfig,
    model: OnceLock<Box<dyn ClassifierModel>>,
}

impl IrisPredictor {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        IrisPredictor {
            config,
            model: OnceLock::new(),
        }
    }

    /// Whether the one-time fit already happened.
    pub fn is_trained(&self) -> bool {
        self.model.get().is_some()
    }

    /// Load the reference dataset and fit the classifier on all of it.
    ///
    /// Idempotent: the dataset load is memoized process-wide and the fit
    /// runs at most once per predictor; repeat calls return immediately.
    /// Fails only when the embedded dataset asset cannot be parsed.
    pub fn train(&self) -> Result<(), PredictorError> {
        self.trained_model().map(|_| ())
    }

    fn trained_model(&self) -> Result<&dyn ClassifierModel, PredictorError> {
        if let Some(model) = self.model.get() {
            return Ok(model.as_ref());
        }

        let data = dataset::load()?;
        let model = self.model.get_or_init(|| {
            let mut model = factory::build_model(self.config.clone());
            model.fit(&data.x, data.y.as_slice(), NUM_CLASSES);
            log::info!(
                "trained {} on {} reference samples",
                model.name(),
                data.x.nrows()
            );
            model
        });
        Ok(model.as_ref())
    }

    /// Predicted class index for one sample, training first if needed.
    ///
    /// The result is the arg-max of `predict_proba`; ties resolve to the
    /// lowest class index.
    pub fn predict(&self, sample: &Sample) -> Result<usize, PredictorError> {
        let proba = self.predict_proba(sample)?;
        Ok(argmax(&proba))
    }

    /// Per-class probabilities for one sample, training first if needed.
    /// Returns one entry per species, each in [0, 1], summing to 1.
    pub fn predict_proba(&self, sample: &Sample) -> Result<Vec<f32>, PredictorError> {
        sample.validate()?;
        let model = self.trained_model()?;

        let x = Array2::from_shape_vec((1, FEATURE_NAMES.len()), sample.to_features().to_vec())
            .expect("single-row feature matrix");
        let proba = model.predict_proba(&x);
        Ok(proba.row_slice(0).to_vec())
    }

    /// Species display names, index-aligned with the class indices
    /// returned by `predict` and `predict_proba`.
    pub fn target_names(&self) -> &'static [&'static str; 3] {
        dataset::target_names()
    }
}

impl Default for IrisPredictor {
    fn default() -> Self {
        Self::new()
    }
}
