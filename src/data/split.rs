use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::model::Dataset;
use crate::error::{PrepError, Result};

/// Reorder the rows by a permutation drawn from `seed`.
///
/// The same seed over the same dataset always gives the same order.
pub fn shuffle(dataset: &Dataset, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.shuffle(&mut rng);
    dataset.reindexed(&order)
}

/// Shuffle with `seed`, then cut into `(train, validation)`.
///
/// The training partition gets the first `floor(len * ratio)` shuffled rows
/// and validation the rest. `ratio` must lie strictly between 0 and 1.
pub fn split(dataset: &Dataset, ratio: f64, seed: u64) -> Result<(Dataset, Dataset)> {
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(PrepError::InvalidSplitRatio(ratio));
    }

    let shuffled = shuffle(dataset, seed);
    let total = shuffled.len();
    let num_train = (total as f64 * ratio).floor() as usize;
    let (train, validation) = shuffled.split_at(num_train);

    log::debug!(
        "Dataset split: {} training, {} validation",
        train.len(),
        validation.len()
    );
    Ok((train, validation))
}
