//! A small supervised-learning toolkit.
//!
//! - [`Perceptron`], [`LogisticRegression`] and [`LinearRegression`]: linear models
//!   trained by per-sample gradient updates.
//! - [`KNearestNeighbours`]: an instance-based classifier over a borrowed training set.
//!
//! Every model follows the same lifecycle: build it with hyperparameters, call
//! `fit` with a feature matrix and one label per row, then call
//! [`Predictor::predict`] per query. All inputs are plain `Vec<f64>` rows;
//! scaling, splitting and encoding live in [`preprocessing`] and run beforehand.

pub mod activation;
pub mod common_types;
pub mod error;
pub mod knn;
pub mod linear;
pub mod math;
pub mod metrics;
pub mod model;
pub mod preprocessing;

#[cfg(feature = "python")]
mod python;

pub use activation::Activation;
pub use common_types::FeatureVector;
pub use error::{LearnError, Result};
pub use knn::{KNearestNeighbours, KnnConfig, Neighbour};
pub use linear::{LinearRegression, LogisticRegression, Perceptron, TrainingConfig};
pub use math::DistanceMetric;
pub use model::Predictor;
