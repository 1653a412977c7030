use crate::math::Array2;

/// A small trait abstraction for the classifier models used by the
/// predictor. This centralizes the contract in the `models` module so
/// implementations can live next to model code. Models must be shareable
/// across threads once trained.
pub trait ClassifierModel: Send + Sync {
    /// Fit the model on `n_classes`-way labeled data. `y` holds class
    /// indices in `0..n_classes`, one per row of `x`.
    fn fit(&mut self, x: &Array2<f32>, y: &[usize], n_classes: usize);

    /// Predict per-class probabilities: one row per sample, one column
    /// per class. Each row sums to 1.
    fn predict_proba(&self, x: &Array2<f32>) -> Array2<f32>;

    /// Predict class indices as the row-wise arg-max of `predict_proba`.
    /// Ties resolve to the lowest class index.
    fn predict(&self, x: &Array2<f32>) -> Vec<usize> {
        let proba = self.predict_proba(x);
        (0..proba.nrows())
            .map(|row| argmax(proba.row_slice(row)))
            .collect()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Index of the largest value; the first index wins a tie.
pub fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::argmax;

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[0.9, 0.05, 0.05]), 0);
    }

    #[test]
    fn argmax_tie_goes_to_lowest_index() {
        assert_eq!(argmax(&[0.4, 0.4, 0.2]), 0);
        assert_eq!(argmax(&[0.0, 0.5, 0.5]), 1);
    }
}
