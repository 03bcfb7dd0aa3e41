use std::collections::HashMap;

use crate::common_types::FeatureVector;
use crate::error::{LearnError, Result};

/// One-hot encodes a categorical column.
///
/// Values are trimmed first. Columns are assigned in order of first
/// appearance, so `["b", "a", "b"]` yields `[[1, 0], [0, 1], [1, 0]]`.
pub fn one_hot_encode<S: AsRef<str>>(categories: &[S]) -> Vec<FeatureVector> {
    let mut columns: HashMap<&str, usize> = HashMap::new();
    let trimmed: Vec<&str> = categories.iter().map(|value| value.as_ref().trim()).collect();
    for &value in &trimmed {
        let next = columns.len();
        columns.entry(value).or_insert(next);
    }

    trimmed
        .iter()
        .map(|value| {
            let mut row = vec![0.0; columns.len()];
            row[columns[value]] = 1.0;
            row
        })
        .collect()
}

/// Appends the one-hot encoding of `categories` to each row of `features`.
pub fn append_one_hot<S: AsRef<str>>(
    features: &[FeatureVector],
    categories: &[S],
) -> Result<Vec<FeatureVector>> {
    if features.len() != categories.len() {
        return Err(LearnError::EmptyOrMismatchedInput {
            features: features.len(),
            labels: categories.len(),
        });
    }

    Ok(features
        .iter()
        .zip(one_hot_encode(categories))
        .map(|(numeric, encoded)| {
            numeric
                .iter()
                .copied()
                .chain(encoded)
                .collect::<FeatureVector>()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_first_appearance_order() {
        let encoded = one_hot_encode(&["red", "green", "red", "blue"]);
        assert_eq!(
            encoded,
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_encode_trims_values() {
        let categories = vec![" yes".to_string(), "no ".to_string(), "yes".to_string()];
        assert_eq!(
            one_hot_encode(&categories),
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]]
        );
    }

    #[test]
    fn test_encode_empty() {
        let categories: [&str; 0] = [];
        assert!(one_hot_encode(&categories).is_empty());
    }

    #[test]
    fn test_append_one_hot() {
        let features = vec![vec![1.5, 2.0], vec![3.0, 4.5]];
        let combined = append_one_hot(&features, &["x", "y"]).unwrap();
        assert_eq!(combined, vec![vec![1.5, 2.0, 1.0, 0.0], vec![3.0, 4.5, 0.0, 1.0]]);
    }

    #[test]
    fn test_append_one_hot_length_mismatch() {
        let features = vec![vec![1.0]];
        assert!(matches!(
            append_one_hot(&features, &["x", "y"]),
            Err(LearnError::EmptyOrMismatchedInput { features: 1, labels: 2 })
        ));
    }
}
