//! Stroke record preparation: encode clinical CSV rows into 16-wide feature
//! vectors, oversample the stroke-positive class and cut seeded
//! train/validation partitions.

pub mod config;
pub mod data;
pub mod error;
pub mod exchange;
pub mod pipeline;

pub use config::PipelineConfig;
pub use data::{Dataset, FEATURE_LEN, Sample};
pub use error::{PrepError, Result};
pub use pipeline::{TrainingSets, prepare_evaluation, prepare_training, prepare_training_with_rng};
