//! A single-layer perceptron: a binary linear threshold classifier.

use super::{LinearCore, TrainingConfig};
use crate::activation::Activation;
use crate::common_types::FeatureVector;
use crate::error::Result;
use crate::model::Predictor;

/// Binary classifier over `{0, 1}` labels using the classic perceptron rule.
///
/// Training visits the samples in input order and applies
/// `weights += learning_rate * (label - prediction) * x` after each one, so a
/// correctly classified sample leaves the weights untouched. The default
/// activation is a Heaviside step with threshold 0.5.
#[derive(Debug, Clone)]
pub struct Perceptron {
    core: LinearCore,
}

impl Perceptron {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        Self::from_config(TrainingConfig::new(epochs, learning_rate))
    }

    pub fn from_config(config: TrainingConfig) -> Self {
        Perceptron {
            core: LinearCore::new(Activation::heaviside_step(), config),
        }
    }

    /// Replaces the default step activation.
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
        self.core
            .train(name, features, labels, |_| {}, |activation, z, label| {
                label - classify(activation, z) as f64
            })
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

/// The activated output truncated to a class id.
fn classify(activation: &Activation, z: f64) -> i32 {
    activation.activate(z) as i32
}

impl Predictor for Perceptron {
    type Output = i32;

    /// Returns 0 or 1 (for the step activation).
    fn predict(&self, features: &[f64]) -> Result<i32> {
        let (z, _) = self.core.forward(features)?;
        Ok(classify(&self.core.activation(), z))
    }

    fn name(&self) -> &'static str {
        "perceptron"
    }
}
