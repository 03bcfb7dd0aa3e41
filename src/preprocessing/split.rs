use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::common_types::FeatureVector;
use crate::error::{LearnError, Result};

/// Training and test partitions of a labelled dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub train_features: Vec<FeatureVector>,
    pub train_labels: Vec<T>,
    pub test_features: Vec<FeatureVector>,
    pub test_labels: Vec<T>,
}

/// Splits rows into a training part of `floor(n * split_ratio)` rows and a test part with the rest.
///
/// Without `shuffle` the input order is kept. With it, rows are permuted first; `seed`
/// makes the permutation reproducible and is ignored when not shuffling.
pub fn train_test_split<T: Clone>(
    features: &[FeatureVector],
    labels: &[T],
    split_ratio: f64,
    shuffle: bool,
    seed: Option<u64>,
) -> Result<Split<T>> {
    if features.len() != labels.len() {
        return Err(LearnError::EmptyOrMismatchedInput {
            features: features.len(),
            labels: labels.len(),
        });
    }
    if !(split_ratio > 0.0 && split_ratio < 1.0) {
        return Err(LearnError::InvalidParameter(format!(
            "split ratio must be between 0 and 1 (exclusive), got {}",
            split_ratio
        )));
    }

    let mut indices: Vec<usize> = (0..features.len()).collect();
    if shuffle {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        indices.shuffle(&mut rng);
    }

    let train_count = (features.len() as f64 * split_ratio) as usize;
    let (train_indices, test_indices) = indices.split_at(train_count);
    debug!(
        train = train_indices.len(),
        test = test_indices.len(),
        shuffle,
        "split dataset"
    );

    let rows = |picked: &[usize]| -> Vec<FeatureVector> {
        picked.iter().map(|&i| features[i].clone()).collect()
    };
    let targets =
        |picked: &[usize]| -> Vec<T> { picked.iter().map(|&i| labels[i].clone()).collect() };

    Ok(Split {
        train_features: rows(train_indices),
        train_labels: targets(train_indices),
        test_features: rows(test_indices),
        test_labels: targets(test_indices),
    })
}
