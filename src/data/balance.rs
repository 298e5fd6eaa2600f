use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Dataset;

/// A generator seeded from the wall clock, so every run balances differently.
pub fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

/// Oversample the positive class until both classes have the same count.
///
/// Draws `negatives - positives` positive rows uniformly with replacement and
/// appends a copy of each. A dataset that is already balanced, positive-heavy,
/// or has no positive rows to draw from is returned unchanged.
pub fn oversample<R: Rng + ?Sized>(mut dataset: Dataset, rng: &mut R) -> Dataset {
    let minority = dataset.positive_indices();
    let (negatives, positives) = dataset.class_counts();
    let deficit = negatives.saturating_sub(positives);

    log::info!("Balancing: {negatives} negative, {positives} positive, deficit {deficit}");

    if deficit == 0 {
        return dataset;
    }
    if minority.is_empty() {
        log::warn!("No positive rows to oversample; leaving {negatives} negatives unbalanced");
        return dataset;
    }

    for _ in 0..deficit {
        let pick = minority[rng.random_range(0..minority.len())];
        dataset.duplicate_row(pick);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FEATURE_LEN, Sample};

    fn dataset(labels: &[f64]) -> Dataset {
        let mut ds = Dataset::new();
        for (i, &label) in labels.iter().enumerate() {
            ds.push(&Sample {
                features: [i as f64; FEATURE_LEN],
                label,
            });
        }
        ds
    }

    #[test]
    fn classes_end_up_equal() {
        let mut rng = StdRng::seed_from_u64(7);
        let ds = oversample(dataset(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0]), &mut rng);
        assert_eq!(ds.class_counts(), (5, 5));
        assert_eq!(ds.len(), 10);
    }

    #[test]
    fn appended_rows_copy_existing_positives() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = dataset(&[0.0, 1.0, 0.0, 0.0, 1.0]);
        let ds = oversample(original.clone(), &mut rng);

        assert_eq!(&ds.labels()[..5], original.labels());
        for row in &ds.inputs()[5..] {
            assert!(row == &original.inputs()[1] || row == &original.inputs()[4]);
        }
        assert!(ds.labels()[5..].iter().all(|&l| l == 1.0));
    }

    #[test]
    fn balanced_or_positive_heavy_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let balanced = dataset(&[0.0, 1.0]);
        assert_eq!(oversample(balanced.clone(), &mut rng), balanced);

        let heavy = dataset(&[1.0, 1.0, 0.0]);
        assert_eq!(oversample(heavy.clone(), &mut rng), heavy);
    }

    #[test]
    fn no_positives_is_unchanged() {
        let mut rng = time_seeded_rng();
        let negatives = dataset(&[0.0, 0.0]);
        assert_eq!(oversample(negatives.clone(), &mut rng), negatives);
    }
}
