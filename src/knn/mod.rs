//! Brute-force k-nearest-neighbours classification.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::common_types::{FeatureVector, validate_training_input};
use crate::error::{LearnError, Result};
use crate::math::DistanceMetric;
use crate::model::Predictor;

/// Hyperparameters of [`KNearestNeighbours`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnnConfig {
    /// Number of neighbours that vote. Must be at least 1.
    pub k: usize,
    pub metric: DistanceMetric,
}

impl Default for KnnConfig {
    fn default() -> Self {
        KnnConfig {
            k: 3,
            metric: DistanceMetric::Euclidean,
        }
    }
}

/// One ranked training sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a, L> {
    /// Position of the sample in the fitted arrays.
    pub index: usize,
    pub distance: f64,
    pub label: &'a L,
}

#[derive(Debug, Clone)]
struct TrainingSet<'a, L> {
    features: &'a [FeatureVector],
    labels: &'a [L],
}

/// Instance-based classifier: keeps the training set and lets the `k` closest
/// samples vote on every query.
///
/// `fit` only borrows the arrays, so the model cannot outlive them and no
/// copy is made.
///
/// Ranking uses a stable sort, so samples at equal distance keep their stored
/// order. A tied vote goes to the label that shows up first among the ranked
/// neighbours.
#[derive(Debug, Clone)]
pub struct KNearestNeighbours<'a, L> {
    k: usize,
    metric: DistanceMetric,
    training_set: Option<TrainingSet<'a, L>>,
}

impl<'a, L> KNearestNeighbours<'a, L> {
    /// # Panics
    /// Panics if `k` is 0.
    pub fn new(k: usize, metric: DistanceMetric) -> Self {
        if k == 0 {
            panic!("k must be greater than 0.");
        }
        KNearestNeighbours {
            k,
            metric,
            training_set: None,
        }
    }

    /// # Panics
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KnnConfig) -> Self {
        Self::new(config.k, config.metric)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn is_fitted(&self) -> bool {
        self.training_set.is_some()
    }

    /// Stores the training set by reference, replacing any previous one.
    ///
    /// Fails with `EmptyOrMismatchedInput` when there are no rows or the array lengths
    /// differ, and with `DimensionMismatch` when the rows are not all the same width.
    pub fn fit(&mut self, features: &'a [FeatureVector], labels: &'a [L]) -> Result<()> {
        let width = validate_training_input(features, labels)?;
        if self.k > features.len() {
            warn!(
                k = self.k,
                samples = features.len(),
                "k exceeds the training set size; every sample will vote"
            );
        }
        debug!(
            samples = features.len(),
            width,
            metric = ?self.metric,
            "stored training set"
        );
        self.training_set = Some(TrainingSet { features, labels });
        Ok(())
    }

    /// The `k` training samples closest to `query`, nearest first.
    pub fn neighbours(&self, query: &[f64]) -> Result<Vec<Neighbour<'a, L>>> {
        let training_set = self.training_set.as_ref().ok_or(LearnError::NotFitted)?;
        let features: &'a [FeatureVector] = training_set.features;
        let labels: &'a [L] = training_set.labels;

        let mut ranked = features
            .iter()
            .zip(labels.iter())
            .enumerate()
            .map(|(index, (sample, label))| {
                Ok(Neighbour {
                    index,
                    distance: self.metric.distance(sample, query)?,
                    label,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // sort_by_key is stable: equal distances keep storage order
        ranked.sort_by_key(|neighbour| OrderedFloat(neighbour.distance));
        ranked.truncate(self.k);
        Ok(ranked)
    }
}

/// Returns the most frequent label, preferring the one seen first on a tie.
fn majority_vote<'l, L, I>(labels: I) -> Option<&'l L>
where
    L: Eq + Hash + 'l,
    I: IntoIterator<Item = &'l L>,
{
    let mut tallies: Vec<(&L, usize)> = Vec::new();
    let mut slots: HashMap<&L, usize> = HashMap::new();

    for label in labels {
        match slots.entry(label) {
            Entry::Occupied(slot) => tallies[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(tallies.len());
                tallies.push((label, 1));
            }
        }
    }

    tallies
        .into_iter()
        .fold(None, |best, (label, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label)
}

impl<'a, L> Predictor for KNearestNeighbours<'a, L>
where
    L: Clone + Eq + Hash,
{
    type Output = L;

    /// Majority label among the `k` nearest training samples.
    fn predict(&self, features: &[f64]) -> Result<L> {
        let neighbours = self.neighbours(features)?;
        // fit rejects empty sets and k >= 1, so the vote always has a winner
        majority_vote(neighbours.iter().map(|neighbour| neighbour.label))
            .cloned()
            .ok_or(LearnError::NotFitted)
    }

    fn name(&self) -> &'static str {
        "k_nearest_neighbours"
    }
}
