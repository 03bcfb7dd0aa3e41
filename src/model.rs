//! The prediction half of the fit/predict contract shared by every model.
//!
//! `fit` stays an inherent method on each model because the argument types
//! differ (integer classes, float targets, borrowed string labels), while
//! prediction only ever needs a single feature vector.

use crate::common_types::FeatureVector;
use crate::error::Result;

pub trait Predictor {
    /// What a single prediction yields (class id, probability pair, value, label).
    type Output;

    /// Predicts the output for one feature vector of the trained width.
    fn predict(&self, features: &[f64]) -> Result<Self::Output>;

    /// Predicts every row, stopping at the first failing one.
    fn predict_many(&self, rows: &[FeatureVector]) -> Result<Vec<Self::Output>> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Human readable model name. The linear trainers tag their fit logs with it.
    fn name(&self) -> &'static str;
}
