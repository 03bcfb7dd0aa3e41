//! Activation functions used by the linear models.

/// Maps a weighted sum to a model output and provides its local slope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    /// `f(x) = x`, `f'(x) = 1`.
    Identity,
    /// Logistic sigmoid, `f(x) = 1 / (1 + e^-x)`.
    Sigmoid,
    /// Fires (1.0) when `x >= threshold`, otherwise 0.0. Its derivative is 0 everywhere.
    HeavisideStep { threshold: f64 },
}

impl Activation {
    pub const DEFAULT_STEP_THRESHOLD: f64 = 0.5;

    /// Sigmoid outputs are kept within these bounds so they never round to exactly 0 or 1.
    const SIGMOID_FLOOR: f64 = f64::MIN_POSITIVE;
    const SIGMOID_CEILING: f64 = 1.0 - f64::EPSILON / 2.0;

    /// A step function with the default threshold of 0.5.
    pub fn heaviside_step() -> Self {
        Self::heaviside_step_with(Self::DEFAULT_STEP_THRESHOLD)
    }

    pub fn heaviside_step_with(threshold: f64) -> Self {
        Activation::HeavisideStep { threshold }
    }

    pub fn activate(&self, x: f64) -> f64 {
        match *self {
            Activation::Identity => x,
            Activation::Sigmoid => {
                (1.0 / (1.0 + (-x).exp())).clamp(Self::SIGMOID_FLOOR, Self::SIGMOID_CEILING)
            }
            Activation::HeavisideStep { threshold } => {
                if x >= threshold {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Slope at the pre-activation input `x`.
    ///
    /// The sigmoid recomputes `activate(x)` rather than taking an already activated value.
    pub fn derivative(&self, x: f64) -> f64 {
        match *self {
            Activation::Identity => 1.0,
            Activation::Sigmoid => {
                let activated = self.activate(x);
                activated * (1.0 - activated)
            }
            Activation::HeavisideStep { .. } => 0.0,
        }
    }
}
