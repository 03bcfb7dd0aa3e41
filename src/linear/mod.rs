//! Linear models trained by per-sample gradient updates.
//!
//! [`Perceptron`], [`LogisticRegression`] and [`LinearRegression`] all keep a
//! weight vector plus bias, predict with `activation(dot(weights, x) + bias)`
//! and train with the same epoch loop. They only differ in the default
//! activation, the per-sample delta and how the output is post-processed, so
//! the loop lives once in [`LinearCore::train`] and each model passes its
//! delta formula in.

pub mod logistic;
pub mod perceptron;
pub mod regression;

pub use logistic::LogisticRegression;
pub use perceptron::Perceptron;
pub use regression::LinearRegression;

use num_traits::AsPrimitive;
use tracing::{debug, trace};

use crate::activation::Activation;
use crate::common_types::{FeatureVector, validate_training_input};
use crate::error::{LearnError, Result};
use crate::math::dot;

/// Hyperparameters shared by the linear models.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrainingConfig {
    /// Number of full passes over the training set per `fit` call.
    pub epochs: usize,
    pub learning_rate: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            epochs: 100,
            learning_rate: 0.01,
        }
    }
}

impl TrainingConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainingConfig {
            epochs,
            learning_rate,
        }
    }

    pub fn epochs(self, epochs: usize) -> Self {
        TrainingConfig { epochs, ..self }
    }

    pub fn learning_rate(self, learning_rate: f64) -> Self {
        TrainingConfig {
            learning_rate,
            ..self
        }
    }
}

/// The learned parameters. Its width is frozen once created.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightState {
    weights: Vec<f64>,
    bias: f64,
}

impl WeightState {
    fn zeros(width: usize) -> Self {
        WeightState {
            weights: vec![0.0; width],
            bias: 0.0,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// `dot(weights, x) + bias`
    pub fn weighted_sum(&self, x: &[f64]) -> Result<f64> {
        Ok(dot(&self.weights, x)? + self.bias)
    }

    /// `weights[i] += step * x[i]` and `bias += step`.
    fn nudge(&mut self, x: &[f64], step: f64) {
        for (weight, &value) in self.weights.iter_mut().zip(x.iter()) {
            *weight += step * value;
        }
        self.bias += step;
    }
}

/// State and training loop shared by the three linear models.
#[derive(Debug, Clone)]
pub(crate) struct LinearCore {
    activation: Activation,
    config: TrainingConfig,
    state: Option<WeightState>,
}

impl LinearCore {
    pub(crate) fn new(activation: Activation, config: TrainingConfig) -> Self {
        LinearCore {
            activation,
            config,
            state: None,
        }
    }

    pub(crate) fn activation(&self) -> Activation {
        self.activation
    }

    pub(crate) fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }

    pub(crate) fn config(&self) -> TrainingConfig {
        self.config
    }

    pub(crate) fn state(&self) -> Option<&WeightState> {
        self.state.as_ref()
    }

    /// `activation(dot(weights, x) + bias)` together with the pre-activation sum.
    pub(crate) fn forward(&self, x: &[f64]) -> Result<(f64, f64)> {
        let state = self.state.as_ref().ok_or(LearnError::NotFitted)?;
        let z = state.weighted_sum(x)?;
        Ok((z, self.activation.activate(z)))
    }

    /// Validates the input and lazily creates the weights on the first call.
    ///
    /// Every check runs before the weights are created or touched.
    fn prepare<L>(
        &mut self,
        features: &[FeatureVector],
        labels: &[L],
    ) -> Result<&mut WeightState> {
        let width = validate_training_input(features, labels)?;

        if let Some(state) = &self.state {
            if state.width() != width {
                return Err(LearnError::IncompatibleShape {
                    expected: state.width(),
                    found: width,
                });
            }
        }

        Ok(self.state.get_or_insert_with(|| WeightState::zeros(width)))
    }

    /// Runs `config.epochs` passes over the data, visiting every sample once per pass.
    ///
    /// - `reorder` may permute the visit order before each pass; the permutation carries over
    ///   into the next pass.
    /// - `delta` maps `(activation, z, label)` to the signed quantity that scales the update:
    ///   `weights[i] += learning_rate * delta * x[i]`, `bias += learning_rate * delta`.
    pub(crate) fn train<L, R, D>(
        &mut self,
        model: &'static str,
        features: &[FeatureVector],
        labels: &[L],
        mut reorder: R,
        delta: D,
    ) -> Result<()>
    where
        L: AsPrimitive<f64>,
        R: FnMut(&mut [usize]),
        D: Fn(&Activation, f64, f64) -> f64,
    {
        let activation = self.activation;
        let TrainingConfig {
            epochs,
            learning_rate,
        } = self.config;
        let state = self.prepare(features, labels)?;

        debug!(
            model,
            samples = features.len(),
            width = state.width(),
            epochs,
            learning_rate,
            "starting training"
        );

        let mut order: Vec<usize> = (0..features.len()).collect();
        for epoch in 0..epochs {
            reorder(&mut order);
            for &sample in order.iter() {
                let x = &features[sample];
                let z = state.weighted_sum(x)?;
                let step = learning_rate * delta(&activation, z, labels[sample].as_());
                state.nudge(x, step);
            }
            trace!(model, epoch, bias = state.bias, "epoch finished");
        }

        debug!(model, bias = state.bias, weights = ?state.weights, "training finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> LinearCore {
        LinearCore::new(Activation::Identity, TrainingConfig::new(1, 0.1))
    }

    #[test]
    fn test_training_config_builders() {
        let config = TrainingConfig::default().epochs(5).learning_rate(0.5);
        assert_eq!(config, TrainingConfig::new(5, 0.5));
        assert_eq!(TrainingConfig::default(), TrainingConfig::new(100, 0.01));
    }

    #[test]
    fn test_weights_created_lazily_with_zeros() {
        let mut core = core();
        assert!(core.state().is_none());
        let features = vec![vec![0.0, 0.0, 0.0]];
        // zero features and zero label produce a zero delta
        core.train("test", &features, &[0.0], |_| {}, |_, _, _| 0.0).unwrap();
        let state = core.state().unwrap();
        assert_eq!(state.weights(), &[0.0, 0.0, 0.0]);
        assert_eq!(state.bias(), 0.0);
    }

    #[test]
    fn test_train_applies_delta_to_weights_and_bias() {
        let mut core = core();
        let features = vec![vec![1.0, 2.0]];
        core.train("test", &features, &[1.0], |_| {}, |_, _, label| label).unwrap();
        let state = core.state().unwrap();
        // step = 0.1 * 1.0
        assert!((state.weights()[0] - 0.1).abs() < 1e-12);
        assert!((state.weights()[1] - 0.2).abs() < 1e-12);
        assert!((state.bias() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_reorder_sees_every_sample_each_epoch() {
        let mut core = LinearCore::new(Activation::Identity, TrainingConfig::new(3, 0.1));
        let features = vec![vec![1.0], vec![2.0], vec![3.0]];
        let mut passes = 0;
        core.train(
            "test",
            &features,
            &[0.0, 0.0, 0.0],
            |order: &mut [usize]| {
                passes += 1;
                let mut seen = order.to_vec();
                seen.sort();
                assert_eq!(seen, vec![0, 1, 2]);
                order.reverse();
            },
            |_, _, _| 0.0,
        )
        .unwrap();
        assert_eq!(passes, 3);
    }

    #[test]
    fn test_forward_before_fit_is_not_fitted() {
        assert_eq!(core().forward(&[1.0]), Err(LearnError::NotFitted));
    }

    #[test]
    fn test_shape_frozen_after_first_fit() {
        let mut core = core();
        core.train("test", &[vec![1.0, 1.0]], &[1.0], |_| {}, |_, _, l| l)
            .unwrap();
        let before = core.state().cloned();

        let result = core.train(
            "test",
            &[vec![1.0, 1.0, 1.0]],
            &[1.0],
            |_| {},
            |_, _, l| l,
        );
        assert_eq!(
            result,
            Err(LearnError::IncompatibleShape {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(core.state().cloned(), before);
    }
}
