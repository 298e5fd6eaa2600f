use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

pub const DEFAULT_TRAINING_PATH: &str = "../data/healthcare-dataset-stroke-data.csv";
pub const DEFAULT_EVALUATION_PATH: &str = "../data/test_data.csv";
/// Copies of every positive row appended at load time.
pub const DEFAULT_POSITIVE_COPIES: usize = 20;
pub const DEFAULT_SPLIT_RATIO: f64 = 0.8;
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Settings for the training and evaluation flows.
///
/// The defaults reproduce previously prepared datasets; a TOML file only needs
/// to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub training_path: PathBuf,
    pub evaluation_path: PathBuf,
    pub positive_copies: usize,
    pub split_ratio: f64,
    pub split_seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            training_path: PathBuf::from(DEFAULT_TRAINING_PATH),
            evaluation_path: PathBuf::from(DEFAULT_EVALUATION_PATH),
            positive_copies: DEFAULT_POSITIVE_COPIES,
            split_ratio: DEFAULT_SPLIT_RATIO,
            split_seed: DEFAULT_SPLIT_SEED,
        }
    }
}

impl PipelineConfig {
    /// Read a TOML config file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PrepError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| PrepError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate_loading()?;
        Ok(config)
    }

    /// Checks every flow needs: settings used while loading a file.
    pub fn validate_loading(&self) -> Result<()> {
        if self.positive_copies == 0 {
            return Err(PrepError::ZeroCopies);
        }
        Ok(())
    }

    /// Checks for the training flow, which also splits.
    pub fn validate(&self) -> Result<()> {
        self.validate_loading()?;
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return Err(PrepError::InvalidSplitRatio(self.split_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_prepared_datasets() {
        let config = PipelineConfig::default();
        assert_eq!(config.positive_copies, 20);
        assert_eq!(config.split_ratio, 0.8);
        assert_eq!(config.split_seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: PipelineConfig = toml::from_str("split_seed = 7\n").unwrap();
        assert_eq!(config.split_seed, 7);
        assert_eq!(config.positive_copies, DEFAULT_POSITIVE_COPIES);
        assert_eq!(config.training_path, PathBuf::from(DEFAULT_TRAINING_PATH));
    }

    #[test]
    fn ratio_is_checked_only_for_training() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prep.toml");

        std::fs::write(&path, "split_ratio = 1.2\n").unwrap();
        let config = PipelineConfig::load(&path).unwrap();
        assert!(config.validate_loading().is_ok());
        assert!(matches!(
            config.validate(),
            Err(PrepError::InvalidSplitRatio(_))
        ));

        std::fs::write(&path, "positive_copies = 0\n").unwrap();
        assert!(matches!(PipelineConfig::load(&path), Err(PrepError::ZeroCopies)));

        std::fs::write(&path, "split_ratio = \"high\"\n").unwrap();
        assert!(matches!(
            PipelineConfig::load(&path),
            Err(PrepError::ParseConfig { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = PipelineConfig::load(Path::new("no/such/prep.toml")).unwrap_err();
        assert!(matches!(err, PrepError::ReadConfig { .. }));
    }
}
