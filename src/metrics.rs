//! Evaluation helpers for predictions produced by the models.

use crate::error::{LearnError, Result};

/// Probabilities are clamped into `[EPSILON, 1 - EPSILON]` before taking logs.
const LOG_LOSS_EPSILON: f64 = 1e-15;

fn ensure_paired<A, B>(predictions: &[A], targets: &[B]) -> Result<usize> {
    if predictions.is_empty() || predictions.len() != targets.len() {
        return Err(LearnError::EmptyOrMismatchedInput {
            features: predictions.len(),
            labels: targets.len(),
        });
    }
    Ok(predictions.len())
}

/// Fraction of predictions equal to their label.
pub fn accuracy<T: PartialEq>(predictions: &[T], labels: &[T]) -> Result<f64> {
    let n = ensure_paired(predictions, labels)?;
    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(prediction, label)| prediction == label)
        .count();
    Ok(correct as f64 / n as f64)
}

/// Mean binary cross-entropy, `-[y ln(p) + (1 - y) ln(1 - p)]`, for labels in `{0, 1}`.
pub fn log_loss(probabilities: &[f64], labels: &[i32]) -> Result<f64> {
    let n = ensure_paired(probabilities, labels)?;
    let total: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| {
            let p = p.clamp(LOG_LOSS_EPSILON, 1.0 - LOG_LOSS_EPSILON);
            let y = y as f64;
            -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        })
        .sum();
    Ok(total / n as f64)
}

pub fn mean_squared_error(predictions: &[f64], targets: &[f64]) -> Result<f64> {
    let n = ensure_paired(predictions, targets)?;
    let total: f64 = predictions
        .iter()
        .zip(targets.iter())
        .map(|(prediction, target)| (prediction - target).powi(2))
        .sum();
    Ok(total / n as f64)
}
