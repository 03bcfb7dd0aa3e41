//! Ordinary linear regression fitted by per-sample gradient descent.

use super::{LinearCore, TrainingConfig};
use crate::activation::Activation;
use crate::common_types::FeatureVector;
use crate::error::Result;
use crate::model::Predictor;

/// Predicts a continuous target as `activation(dot(coefficients, x) + intercept)`.
///
/// With the default identity activation this is plain least-squares regression.
/// Samples are visited in input order and each one moves the parameters by
/// `learning_rate * (target - prediction) * activation'(z)`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    core: LinearCore,
}

impl LinearRegression {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        Self::from_config(TrainingConfig::new(epochs, learning_rate))
    }

    pub fn from_config(config: TrainingConfig) -> Self {
        LinearRegression {
            core: LinearCore::new(Activation::Identity, config),
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.core.set_activation(activation);
        self
    }

    /// Trains on `features` against continuous `targets`.
    ///
    /// The first call fixes the feature width; later calls keep training the same
    /// coefficients and must use the same width.
    pub fn fit(&mut self, features: &[FeatureVector], targets: &[f64]) -> Result<()> {
        let name = self.name();
        self.core
            .train(name, features, targets, |_| {}, |activation, z, target| {
                (target - activation.activate(z)) * activation.derivative(z)
            })
    }

    pub fn coefficients(&self) -> Option<&[f64]> {
        self.core.state().map(|state| state.weights())
    }

    pub fn intercept(&self) -> Option<f64> {
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

impl Predictor for LinearRegression {
    type Output = f64;

    fn predict(&self, features: &[f64]) -> Result<f64> {
        let (_, value) = self.core.forward(features)?;
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "linear_regression"
    }
}
