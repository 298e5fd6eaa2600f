//! Wire form of a [`Dataset`] and its reconstitution into matrices.
//!
//! A message carries a repeated label field and a repeated nested input
//! field. The receiving side rebuilds a row-major `(N, L)` feature matrix and
//! an `(N, 1)` label column from it.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::{PrepError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputVector {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataMessage {
    pub labels: Vec<f64>,
    pub input: Vec<InputVector>,
}

impl DataMessage {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            labels: dataset.labels().to_vec(),
            input: dataset
                .inputs()
                .iter()
                .map(|row| InputVector {
                    values: row.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Rebuild `(features, labels)` matrices of shape `(N, L)` and `(N, 1)`.
    ///
    /// Every input row must have the width of the first one.
    pub fn to_matrices(&self) -> Result<(Array2<f64>, Array2<f64>)> {
        let first = self.input.first().ok_or(PrepError::EmptyExchange)?;
        let rows = self.input.len();
        let cols = first.values.len();

        if self.labels.len() != rows {
            return Err(PrepError::LabelCount {
                labels: self.labels.len(),
                inputs: rows,
            });
        }

        let mut flat = Vec::with_capacity(rows * cols);
        for (row, input) in self.input.iter().enumerate() {
            if input.values.len() != cols {
                return Err(PrepError::RaggedInput {
                    row,
                    expected: cols,
                    found: input.values.len(),
                });
            }
            flat.extend_from_slice(&input.values);
        }

        let features = Array2::from_shape_vec((rows, cols), flat)?;
        let labels = Array2::from_shape_vec((rows, 1), self.labels.clone())?;
        Ok((features, labels))
    }
}
