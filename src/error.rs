use std::path::PathBuf;

/// Errors surfaced by the preparation pipeline.
///
/// Dropped rows and unparseable numeric cells are not errors; only whole-file
/// failures and contract violations end up here.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// The source file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: csv::Error,
    },
    /// The file opened but its CSV content could not be read.
    #[error("failed to read {path} near line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        source: csv::Error,
    },
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::config::PipelineConfig`].
    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("split ratio must lie strictly between 0 and 1, got {0}")]
    InvalidSplitRatio(f64),
    #[error("positive_copies must be at least 1")]
    ZeroCopies,
    /// A data message with no rows cannot be turned into matrices.
    #[error("data message has no input rows")]
    EmptyExchange,
    #[error("data message has {labels} labels but {inputs} input rows")]
    LabelCount { labels: usize, inputs: usize },
    #[error("input row {row} has {found} values, expected {expected}")]
    RaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, PrepError>;
