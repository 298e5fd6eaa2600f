use rand::Rng;

use crate::config::PipelineConfig;
use crate::data::balance::{oversample, time_seeded_rng};
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::data::split::split;
use crate::error::Result;

/// Training and validation partitions produced by [`prepare_training`].
#[derive(Debug, Clone)]
pub struct TrainingSets {
    pub train: Dataset,
    pub validation: Dataset,
}

/// Load → balance → split, with a wall-clock seeded balancer.
pub fn prepare_training(config: &PipelineConfig) -> Result<TrainingSets> {
    prepare_training_with_rng(config, &mut time_seeded_rng())
}

/// [`prepare_training`] with the balancing generator supplied by the caller.
///
/// The split always uses `config.split_seed`, so only `rng` decides which
/// positive rows get duplicated.
pub fn prepare_training_with_rng<R: Rng + ?Sized>(
    config: &PipelineConfig,
    rng: &mut R,
) -> Result<TrainingSets> {
    config.validate()?;
    let report = load_csv(&config.training_path, config.positive_copies)?;
    let balanced = oversample(report.dataset, rng);
    let (train, validation) = split(&balanced, config.split_ratio, config.split_seed)?;
    log::info!(
        "Training sets ready: {} train, {} validation",
        train.len(),
        validation.len()
    );
    Ok(TrainingSets { train, validation })
}

/// Load the evaluation file as-is: no balancing, no split.
pub fn prepare_evaluation(config: &PipelineConfig) -> Result<Dataset> {
    config.validate_loading()?;
    let report = load_csv(&config.evaluation_path, config.positive_copies)?;
    Ok(report.dataset)
}
