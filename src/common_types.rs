//! This module contains the data shapes and input checks shared by the models.

use crate::error::{LearnError, Result};

/// A single sample: one value per feature, fixed length per dataset.
pub type FeatureVector = Vec<f64>;

/// Unwraps an argument that a caller outside Rust (such as Python passing `None`)
/// may have left out.
pub fn required<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or(LearnError::NullInput { argument })
}

/// Checks that a training set is usable and returns its feature width.
///
/// - `features` must have at least one row and exactly one row per label.
/// - Every row must be as wide as the first one.
///
/// Nothing is mutated here, so callers run this before touching model state.
pub fn validate_training_input<L>(features: &[FeatureVector], labels: &[L]) -> Result<usize> {
    if features.is_empty() || features.len() != labels.len() {
        return Err(LearnError::EmptyOrMismatchedInput {
            features: features.len(),
            labels: labels.len(),
        });
    }

    let width = features[0].len();
    if let Some(row) = features.iter().find(|row| row.len() != width) {
        return Err(LearnError::DimensionMismatch {
            left: width,
            right: row.len(),
        });
    }

    Ok(width)
}
