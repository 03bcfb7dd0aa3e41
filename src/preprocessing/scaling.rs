use tracing::warn;

use crate::common_types::FeatureVector;
use crate::error::{LearnError, Result};

/// Per-column min-max scaling into `[0, 1]`.
///
/// Fit it on the training rows and reuse the same instance for test rows and
/// later queries so every split is scaled by the same bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl MinMaxScaler {
    /// Computes the minimum and maximum of every column.
    pub fn fit(data: &[FeatureVector]) -> Result<Self> {
        let first = data.first().ok_or(LearnError::EmptyOrMismatchedInput {
            features: 0,
            labels: 0,
        })?;

        let mut mins = first.clone();
        let mut maxs = first.clone();
        for row in &data[1..] {
            if row.len() != mins.len() {
                return Err(LearnError::DimensionMismatch {
                    left: mins.len(),
                    right: row.len(),
                });
            }
            for (column, &value) in row.iter().enumerate() {
                mins[column] = mins[column].min(value);
                maxs[column] = maxs[column].max(value);
            }
        }

        let constant = mins.iter().zip(maxs.iter()).filter(|(min, max)| min == max).count();
        if constant > 0 {
            warn!(columns = constant, "constant columns will scale to 0.0");
        }

        Ok(MinMaxScaler { mins, maxs })
    }

    /// Builds a scaler from bounds computed elsewhere.
    pub fn from_bounds(mins: Vec<f64>, maxs: Vec<f64>) -> Result<Self> {
        if mins.len() != maxs.len() {
            return Err(LearnError::DimensionMismatch {
                left: mins.len(),
                right: maxs.len(),
            });
        }
        if let Some(column) = mins
            .iter()
            .zip(maxs.iter())
            .position(|(min, max)| min > max)
        {
            return Err(LearnError::InvalidParameter(format!(
                "column {} has min {} above max {}",
                column, mins[column], maxs[column]
            )));
        }
        Ok(MinMaxScaler { mins, maxs })
    }

    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    pub fn maxs(&self) -> &[f64] {
        &self.maxs
    }

    /// Scales one row; a column with zero range maps to 0.0.
    pub fn transform_row(&self, row: &[f64]) -> Result<FeatureVector> {
        if row.len() != self.mins.len() {
            return Err(LearnError::DimensionMismatch {
                left: self.mins.len(),
                right: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(self.mins.iter().zip(self.maxs.iter()))
            .map(|(&value, (&min, &max))| {
                let range = max - min;
                if range == 0.0 { 0.0 } else { (value - min) / range }
            })
            .collect())
    }

    pub fn transform(&self, data: &[FeatureVector]) -> Result<Vec<FeatureVector>> {
        data.iter().map(|row| self.transform_row(row)).collect()
    }
}
