//! Error type shared by every model and helper in the crate.

use thiserror::Error;

/// Everything that can go wrong while fitting, predicting or preprocessing.
///
/// Validation errors are always raised before any model state is touched, so a
/// failed call leaves the model exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LearnError {
    /// A required array argument was absent.
    #[error("required argument `{argument}` is missing")]
    NullInput { argument: &'static str },

    /// Zero rows, or feature and label arrays of different lengths.
    #[error("features and labels must not be empty and of the same length (got {features} feature rows, {labels} labels)")]
    EmptyOrMismatchedInput { features: usize, labels: usize },

    /// The feature width changed since the model was first fitted.
    #[error("cannot fit: feature-vector length changed since initialization (expected {expected}, found {found})")]
    IncompatibleShape { expected: usize, found: usize },

    /// Two vectors of unequal length met in a vector operation.
    #[error("vectors must be of the same length ({left} != {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// Prediction was requested before `fit`.
    #[error("model has not been fitted yet; call fit() first")]
    NotFitted,

    /// A helper argument was outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, LearnError>;
