//! Vector kernel shared by every model: dot product and distance metrics.

pub mod distance;
pub mod vector;

pub use distance::{DistanceMetric, chebyshev, distance, euclidean, manhattan};
pub use vector::dot;

use crate::error::{LearnError, Result};

/// Fails with `DimensionMismatch` unless both slices have the same length.
#[inline]
pub(crate) fn ensure_same_len<F>(a: &[F], b: &[F]) -> Result<()> {
    if a.len() != b.len() {
        return Err(LearnError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
