//! Binary logistic regression trained with stochastic gradient descent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{LinearCore, TrainingConfig};
use crate::activation::Activation;
use crate::common_types::FeatureVector;
use crate::error::Result;
use crate::model::Predictor;

/// Probabilities at or above this value are assigned to class 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic regression for `{0, 1}` labels.
///
/// Each epoch visits the samples in a freshly shuffled order (Fisher-Yates) and
/// descends the cross-entropy gradient: with `p = sigmoid(dot(w, x) + b)` the
/// update is `w -= learning_rate * (p - y) * x`.
///
/// The shuffle draws from an owned [`StdRng`]. [`LogisticRegression::new`] seeds it
/// from the OS, so two runs may visit samples in different orders; use
/// [`LogisticRegression::with_seed`] or [`LogisticRegression::with_rng`] for a
/// reproducible training path.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    core: LinearCore,
    rng: StdRng,
}

impl LogisticRegression {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        Self::from_config(TrainingConfig::new(epochs, learning_rate))
    }

    pub fn from_config(config: TrainingConfig) -> Self {
        LogisticRegression {
            core: LinearCore::new(Activation::Sigmoid, config),
            rng: StdRng::from_entropy(),
        }
    }

    /// Makes the per-epoch shuffle reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Replaces the default sigmoid activation.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.core.set_activation(activation);
        self
    }

    /// Trains on `features` with `labels` in `{0, 1}`.
    ///
    /// The first call fixes the feature width; later calls keep training the same weights and
    /// must use the same width.
    pub fn fit(&mut self, features: &[FeatureVector], labels: &[i32]) -> Result<()> {
        let name = self.name();
        self.core.train(
            name,
            features,
            labels,
            |order| {
                for (position, sample) in order.iter_mut().enumerate() {
                    *sample = position;
                }
                order.shuffle(&mut self.rng);
            },
            // (p - y) is subtracted, i.e. the delta is (y - p)
            |activation, z, label| label - activation.activate(z),
        )
    }

    /// Probability of class 1 for `features`.
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        let (_, probability) = self.core.forward(features)?;
        Ok(probability)
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.core.state().map(|state| state.weights())
    }

    pub fn bias(&self) -> Option<f64> {
        self.core.state().map(|state| state.bias())
    }

    pub fn is_fitted(&self) -> bool {
        self.core.state().is_some()
    }

    pub fn config(&self) -> TrainingConfig {
        self.core.config()
    }

    pub fn activation(&self) -> Activation {
        self.core.activation()
    }
}

impl Predictor for LogisticRegression {
    /// `(probability, class_id)`
    type Output = (f64, i32);

    fn predict(&self, features: &[f64]) -> Result<(f64, i32)> {
        let probability = self.predict_proba(features)?;
        let class_id = if probability >= DECISION_THRESHOLD { 1 } else { 0 };
        Ok((probability, class_id))
    }

    fn name(&self) -> &'static str {
        "logistic_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LearnError;

    fn or_dataset() -> (Vec<FeatureVector>, Vec<i32>) {
        (
            vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
            ],
            vec![0, 1, 1, 1],
        )
    }

    #[test]
    fn test_new_uses_sigmoid() {
        let model = LogisticRegression::new(50, 0.1);
        assert_eq!(model.activation(), Activation::Sigmoid);
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_learns_or() {
        let (features, labels) = or_dataset();
        for seed in 0..20 {
            let mut model = LogisticRegression::new(100, 0.1).with_seed(seed);
            model.fit(&features, &labels).unwrap();

            for (x, &expected) in features.iter().zip(labels.iter()) {
                let (probability, class_id) = model.predict(x).unwrap();
                assert_eq!(class_id, expected, "seed {}: wrong class for {:?}", seed, x);
                assert_eq!(probability >= 0.5, expected == 1);
            }
        }
    }

    #[test]
    fn test_learns_or_unseeded() {
        let (features, labels) = or_dataset();
        let mut model = LogisticRegression::new(100, 0.1);
        model.fit(&features, &labels).unwrap();
        let classes: Vec<i32> = model
            .predict_many(&features)
            .unwrap()
            .into_iter()
            .map(|(_, class_id)| class_id)
            .collect();
        assert_eq!(classes, labels);
    }

    #[test]
    fn test_same_seed_reproduces_weights() {
        let (features, labels) = or_dataset();
        let mut first = LogisticRegression::new(25, 0.1).with_seed(7);
        let mut second = LogisticRegression::new(25, 0.1).with_seed(7);
        first.fit(&features, &labels).unwrap();
        second.fit(&features, &labels).unwrap();
        assert_eq!(first.weights(), second.weights());
        assert_eq!(first.bias(), second.bias());
    }

    #[test]
    fn test_untrained_probability_is_one_half() {
        let (features, labels) = or_dataset();
        let mut model = LogisticRegression::new(0, 0.1);
        model.fit(&features, &labels).unwrap();
        // zero epochs still initialise the weights
        assert_eq!(model.predict(&[3.0, -2.0]), Ok((0.5, 1)));
    }

    #[test]
    fn test_probability_is_monotonic_in_positive_feature() {
        let (features, labels) = or_dataset();
        let mut model = LogisticRegression::new(100, 0.1).with_seed(3);
        model.fit(&features, &labels).unwrap();
        let low = model.predict_proba(&[0.0, 0.0]).unwrap();
        let high = model.predict_proba(&[1.0, 1.0]).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_fit_errors() {
        let mut model = LogisticRegression::new(50, 0.1).with_seed(1);
        assert!(matches!(
            model.fit(&[], &[]),
            Err(LearnError::EmptyOrMismatchedInput { features: 0, labels: 0 })
        ));
        assert!(matches!(
            model.fit(&[vec![1.0, 2.0]], &[1, 2, 3]),
            Err(LearnError::EmptyOrMismatchedInput { .. })
        ));

        let (features, labels) = or_dataset();
        model.fit(&features, &labels).unwrap();
        let weights = model.weights().unwrap().to_vec();
        assert_eq!(
            model.fit(&[vec![1.0]], &[1]),
            Err(LearnError::IncompatibleShape {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(model.weights().unwrap(), weights.as_slice());
    }

    #[test]
    fn test_predict_errors() {
        let model = LogisticRegression::new(50, 0.1);
        assert_eq!(model.predict(&[0.0, 1.0]), Err(LearnError::NotFitted));
        assert_eq!(model.predict_proba(&[0.0, 1.0]), Err(LearnError::NotFitted));
    }
}
