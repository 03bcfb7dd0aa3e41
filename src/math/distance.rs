//! Distance metrics between two feature vectors of equal length.

use num_traits::Float;

use super::ensure_same_len;
use crate::error::Result;

/// The distance used to rank neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// `sqrt(sum((a_i - b_i)^2))`
    #[default]
    Euclidean,
    /// `sum(|a_i - b_i|)`
    Manhattan,
    /// `max(|a_i - b_i|)`
    Chebyshev,
}

impl DistanceMetric {
    /// Computes the distance between `a` and `b` under this metric.
    pub fn distance<F: Float>(&self, a: &[F], b: &[F]) -> Result<F> {
        distance(*self, a, b)
    }
}

/// Dispatches to the selected metric.
pub fn distance<F: Float>(metric: DistanceMetric, a: &[F], b: &[F]) -> Result<F> {
    match metric {
        DistanceMetric::Euclidean => euclidean(a, b),
        DistanceMetric::Manhattan => manhattan(a, b),
        DistanceMetric::Chebyshev => chebyshev(a, b),
    }
}

pub fn euclidean<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    ensure_same_len(a, b)?;
    let sum_sq_diff = a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| {
        let diff = x - y;
        acc + diff * diff
    });
    Ok(sum_sq_diff.sqrt())
}

pub fn manhattan<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    ensure_same_len(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (&x, &y)| acc + (x - y).abs()))
}

/// Largest absolute coordinate difference; 0 for empty vectors.
pub fn chebyshev<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    ensure_same_len(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .fold(F::zero(), |max, (&x, &y)| max.max((x - y).abs())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LearnError;

    const ALL_METRICS: [DistanceMetric; 3] = [
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
    ];

    #[test]
    fn test_known_distances() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 6.0, 3.0];
        let epsilon = 1e-12;

        // diffs are 3, 4, 0
        assert!((euclidean(&a, &b).unwrap() - 5.0).abs() < epsilon);
        assert!((manhattan(&a, &b).unwrap() - 7.0).abs() < epsilon);
        assert!((chebyshev(&a, &b).unwrap() - 4.0).abs() < epsilon);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let vectors: Vec<Vec<f64>> = vec![
            vec![],
            vec![0.0],
            vec![-3.5, 2.25, 1e6],
            vec![0.1, 0.2, 0.3, 0.4, 0.5],
        ];
        for metric in ALL_METRICS {
            for v in &vectors {
                assert_eq!(distance(metric, v, v), Ok(0.0), "{:?} on {:?}", metric, v);
            }
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = vec![0.3, -1.0, 8.0];
        let b = vec![2.0, 0.5, -4.0];
        for metric in ALL_METRICS {
            assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
        }
    }

    #[test]
    fn test_distance_dimension_mismatch_for_every_metric() {
        for metric in ALL_METRICS {
            assert_eq!(
                distance(metric, &[1.0, 2.0, 3.0], &[1.0, 2.0]),
                Err(LearnError::DimensionMismatch { left: 3, right: 2 }),
                "{:?} should reject unequal lengths",
                metric
            );
        }
    }

    #[test]
    fn test_chebyshev_uses_absolute_difference() {
        let a = [0.0_f32, 10.0];
        let b = [-7.0_f32, 9.0];
        assert_eq!(chebyshev(&a, &b), Ok(7.0_f32));
    }
}
