use num_traits::Float;

use super::ensure_same_len;
use crate::error::Result;

/// Calculates the dot product (sum of element-wise products) of two vectors.
pub fn dot<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    ensure_same_len(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (&x, &y)| acc + x * y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LearnError;

    #[test]
    fn test_dot_known_value() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert_eq!(dot(&a, &b), Ok(32.0));
    }

    #[test]
    fn test_dot_is_commutative() {
        let pairs: Vec<(Vec<f64>, Vec<f64>)> = vec![
            (vec![0.5, -1.25, 3.0], vec![2.0, 4.0, -0.75]),
            (vec![1e-3, 1e3], vec![-7.0, 0.125]),
            (vec![], vec![]),
        ];
        for (a, b) in pairs {
            assert_eq!(dot(&a, &b), dot(&b, &a));
        }
    }

    #[test]
    fn test_dot_works_for_f32() {
        let a = [1.5_f32, 2.0];
        let b = [2.0_f32, 0.25];
        assert_eq!(dot(&a, &b), Ok(3.5_f32));
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        assert_eq!(
            dot(&[1.0, 2.0], &[1.0]),
            Err(LearnError::DimensionMismatch { left: 2, right: 1 })
        );
    }
}
