use std::borrow::Cow;
use std::io;
use std::path::Path;

use super::encoder::{DropReason, encode_row};
use super::model::Dataset;
use crate::error::{PrepError, Result};

// ---------------------------------------------------------------------------
// Load statistics
// ---------------------------------------------------------------------------

/// Per-file counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows that produced a sample.
    pub rows_kept: usize,
    pub dropped_gender: usize,
    pub dropped_bmi: usize,
    /// Rows with fewer than 12 cells. The reader rejects rows whose width
    /// differs from the header, so this only moves for a short header.
    pub dropped_short: usize,
    /// Rows appended to the dataset, positive copies included.
    pub emitted: usize,
}

impl LoadStats {
    pub fn dropped(&self) -> usize {
        self.dropped_gender + self.dropped_bmi + self.dropped_short
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::Gender => self.dropped_gender += 1,
            DropReason::MissingBmi => self.dropped_bmi += 1,
            DropReason::ShortRow => self.dropped_short += 1,
        }
    }
}

/// A loaded dataset together with what happened to the source rows.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub dataset: Dataset,
    pub stats: LoadStats,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and encode a stroke CSV file.
///
/// The first row is a header and is skipped. Every positive row is appended
/// `positive_copies` times, negatives once; read order is otherwise kept.
/// Rows the encoder rejects are counted and skipped, never fatal.
pub fn load_csv(path: &Path, positive_copies: usize) -> Result<LoadReport> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| PrepError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let report = read_records(reader, path, positive_copies)?;
    let stats = &report.stats;
    log::info!(
        "Loaded {}: {} rows read, {} kept, {} dropped (gender {}, bmi {}, short {}), {} samples",
        path.display(),
        stats.rows_read,
        stats.rows_kept,
        stats.dropped(),
        stats.dropped_gender,
        stats.dropped_bmi,
        stats.dropped_short,
        stats.emitted,
    );
    Ok(report)
}

/// Same as [`load_csv`] over any reader; `origin` is only used in errors.
pub fn load_from_reader<R: io::Read>(
    input: R,
    origin: &Path,
    positive_copies: usize,
) -> Result<LoadReport> {
    let reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    read_records(reader, origin, positive_copies)
}

fn read_records<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin: &Path,
    positive_copies: usize,
) -> Result<LoadReport> {
    let mut dataset = Dataset::new();
    let mut stats = LoadStats::default();

    for result in reader.byte_records() {
        let record = result.map_err(|source| PrepError::Read {
            path: origin.to_path_buf(),
            line: source.position().map(|p| p.line()).unwrap_or_default(),
            source,
        })?;
        stats.rows_read += 1;

        // Invalid UTF-8 is a cell problem, not a file problem.
        let cells: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        match encode_row(&cells) {
            Ok(sample) => {
                let copies = if sample.is_positive() {
                    positive_copies
                } else {
                    1
                };
                for _ in 0..copies {
                    dataset.push(&sample);
                }
                stats.rows_kept += 1;
                stats.emitted += copies;
            }
            Err(reason) => {
                log::debug!(
                    "Dropping line {}: {reason}",
                    record.position().map(|p| p.line()).unwrap_or_default()
                );
                stats.record_drop(reason);
            }
        }
    }

    Ok(LoadReport { dataset, stats })
}
