use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use rayon::prelude::*;

use crate::config::{ModelConfig, ModelType};
use crate::math::Array2;
use crate::models::classifier_trait::ClassifierModel;

/// One-vs-rest ensemble of gradient boosted decision trees.
///
/// The underlying library fits binary classifiers, so multiclass support
/// trains one booster per class on +1/-1 labels and normalizes the
/// per-class probabilities into a distribution. Default sampling ratios
/// (1.0) make every fit deterministic.
pub struct GbdtClassifier {
    boosters: Vec<GBDT>,
    config: ModelConfig,
}

impl GbdtClassifier {
    pub fn new(config: ModelConfig) -> Self {
        GbdtClassifier {
            boosters: Vec::new(),
            config,
        }
    }

    fn booster_config(&self, feature_size: usize) -> Config {
        let ModelType::Gbdt {
            max_depth,
            num_boost_round,
            debug,
            training_optimization_level,
            loss_type,
        } = &self.config.model_type;

        let mut config = Config::new();
        config.set_feature_size(feature_size);
        config.set_shrinkage(self.config.learning_rate);
        config.set_max_depth(*max_depth);
        config.set_iterations(*num_boost_round as usize);
        config.set_debug(*debug);
        config.set_training_optimization_level(*training_optimization_level);
        config.set_loss(loss_type);
        config
    }
}

impl ClassifierModel for GbdtClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &[usize], n_classes: usize) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "feature rows and labels must have equal length"
        );
        let feature_size = x.ncols();

        let boosters: Vec<GBDT> = (0..n_classes)
            .into_par_iter()
            .map(|class| {
                let config = self.booster_config(feature_size);
                let mut gbdt = GBDT::new(&config);

                let mut train_x = DataVec::new();
                for row in 0..x.nrows() {
                    let train_row = x.row_slice(row).to_vec();
                    let label = if y[row] == class { 1.0 } else { -1.0 };
                    train_x.push(Data::new_training_data(train_row, 1.0, label, None));
                }

                gbdt.fit(&mut train_x);
                gbdt
            })
            .collect();

        log::debug!(
            "fit {} one-vs-rest boosters on {} samples",
            n_classes,
            x.nrows()
        );
        self.boosters = boosters;
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Array2<f32> {
        assert!(!self.boosters.is_empty(), "predict_proba called before fit");
        let n_classes = self.boosters.len();

        let mut test_x = DataVec::new();
        for row in 0..x.nrows() {
            let test_row = x.row_slice(row).to_vec();
            test_x.push(Data::new_training_data(test_row, 1.0, 0.0, None));
        }

        // With LogLikelyhood loss the library already maps each booster's
        // margin to the positive-class probability.
        let per_class: Vec<Vec<f32>> = self
            .boosters
            .iter()
            .map(|booster| booster.predict(&test_x))
            .collect();

        let mut data = Vec::with_capacity(x.nrows() * n_classes);
        for row in 0..x.nrows() {
            let scores: Vec<f32> = per_class.iter().map(|probs| probs[row]).collect();
            let total: f32 = scores.iter().sum();
            if total > f32::EPSILON {
                data.extend(scores.iter().map(|score| score / total));
            } else {
                // All boosters rejected the sample; fall back to uniform
                // so rows always form a distribution.
                data.extend(std::iter::repeat(1.0 / n_classes as f32).take(n_classes));
            }
        }

        Array2::from_shape_vec((x.nrows(), n_classes), data)
            .expect("probability matrix shape matches input rows")
    }

    fn name(&self) -> &str {
        "gbdt-one-vs-rest"
    }
}
