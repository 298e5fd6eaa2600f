/// Number of values in every encoded feature vector.
pub const FEATURE_LEN: usize = 16;

/// Label value of the stroke-positive (minority) class.
pub const POSITIVE: f64 = 1.0;
/// Label value of the stroke-negative (majority) class.
pub const NEGATIVE: f64 = 0.0;

// ---------------------------------------------------------------------------
// Sample – one encoded record
// ---------------------------------------------------------------------------

/// A single encoded record: the fixed-length feature vector and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: [f64; FEATURE_LEN],
    /// Either [`POSITIVE`] or [`NEGATIVE`].
    pub label: f64,
}

impl Sample {
    pub fn is_positive(&self) -> bool {
        self.label == POSITIVE
    }
}

// ---------------------------------------------------------------------------
// Dataset – parallel labels / inputs
// ---------------------------------------------------------------------------

/// Parallel sequences of labels and feature vectors.
///
/// `labels[i]` belongs to `inputs[i]`, and every vector in `inputs` has
/// exactly [`FEATURE_LEN`] values. The fields are private so that the only
/// way in is [`Dataset::push`], which keeps both sequences in step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    labels: Vec<f64>,
    inputs: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample. The feature vector is copied into a fresh row.
    pub fn push(&mut self, sample: &Sample) {
        self.labels.push(sample.label);
        self.inputs.push(sample.features.to_vec());
    }

    /// Append a deep copy of row `index` to the end of the dataset.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn duplicate_row(&mut self, index: usize) {
        let row = self.inputs[index].clone();
        self.labels.push(self.labels[index]);
        self.inputs.push(row);
    }

    /// Build a new dataset holding the rows at `order`, in that order.
    pub(crate) fn reindexed(&self, order: &[usize]) -> Self {
        Self {
            labels: order.iter().map(|&i| self.labels[i]).collect(),
            inputs: order.iter().map(|&i| self.inputs[i].clone()).collect(),
        }
    }

    /// Split into `[0, at)` and `[at, len)`, consuming the dataset.
    pub(crate) fn split_at(mut self, at: usize) -> (Self, Self) {
        let at = at.min(self.len());
        let tail = Self {
            labels: self.labels.split_off(at),
            inputs: self.inputs.split_off(at),
        };
        (self, tail)
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Count of `(negative, positive)` rows.
    pub fn class_counts(&self) -> (usize, usize) {
        let positives = self.labels.iter().filter(|&&l| l == POSITIVE).count();
        (self.len() - positives, positives)
    }

    /// Indices of the stroke-positive rows, in row order.
    pub fn positive_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == POSITIVE)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: f64, fill: f64) -> Sample {
        Sample {
            features: [fill; FEATURE_LEN],
            label,
        }
    }

    #[test]
    fn push_keeps_sequences_parallel() {
        let mut ds = Dataset::new();
        ds.push(&sample(NEGATIVE, 1.0));
        ds.push(&sample(POSITIVE, 2.0));

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.labels(), &[0.0, 1.0]);
        assert!(ds.inputs().iter().all(|row| row.len() == FEATURE_LEN));
        assert_eq!(ds.inputs()[1][0], 2.0);
    }

    #[test]
    fn duplicate_row_is_a_deep_copy() {
        let mut ds = Dataset::new();
        ds.push(&sample(POSITIVE, 3.0));
        ds.duplicate_row(0);
        ds.inputs[1][0] = 9.0;

        assert_eq!(ds.inputs()[0][0], 3.0);
        assert_eq!(ds.labels(), &[1.0, 1.0]);
    }

    #[test]
    fn class_counts_and_positive_indices() {
        let mut ds = Dataset::new();
        for label in [0.0, 1.0, 0.0, 0.0, 1.0] {
            ds.push(&sample(label, 0.0));
        }
        assert_eq!(ds.class_counts(), (3, 2));
        assert_eq!(ds.positive_indices(), vec![1, 4]);
    }

    #[test]
    fn split_at_clamps_to_length() {
        let mut ds = Dataset::new();
        ds.push(&sample(NEGATIVE, 0.0));
        let (head, tail) = ds.split_at(5);
        assert_eq!(head.len(), 1);
        assert!(tail.is_empty());
    }
}
