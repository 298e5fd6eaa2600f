use std::fmt;

use super::model::{FEATURE_LEN, NEGATIVE, POSITIVE, Sample};

/// Number of cells a record must carry (id + ten attributes + stroke).
pub const RECORD_WIDTH: usize = 12;

// Source column positions.
const COL_GENDER: usize = 1;
const COL_AGE: usize = 2;
const COL_HYPERTENSION: usize = 3;
const COL_HEART_DISEASE: usize = 4;
const COL_EVER_MARRIED: usize = 5;
const COL_WORK_TYPE: usize = 6;
const COL_RESIDENCE: usize = 7;
const COL_GLUCOSE: usize = 8;
const COL_BMI: usize = 9;
const COL_SMOKING: usize = 10;
const COL_STROKE: usize = 11;

// Feature vector offsets.
const WORK_TYPE_AT: usize = 5;
const SMOKING_AT: usize = 13;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// A categorical column encoded one-hot.
///
/// `TABLE` lists the source spelling of every variant in slot order; adding a
/// category is a table edit. Cells matching no entry encode as all zeros.
pub trait Category: Copy + PartialEq + 'static {
    const TABLE: &'static [(&'static str, Self)];

    fn from_cell(cell: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == cell)
            .map(|&(_, value)| value)
    }

    /// One-hot slot of this variant.
    fn slot(self) -> usize {
        Self::TABLE
            .iter()
            .position(|&(_, value)| value == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    Children,
    GovtJob,
    NeverWorked,
    Private,
    SelfEmployed,
}

impl Category for WorkType {
    const TABLE: &'static [(&'static str, Self)] = &[
        ("children", WorkType::Children),
        ("Govt_job", WorkType::GovtJob),
        ("Never_worked", WorkType::NeverWorked),
        ("Private", WorkType::Private),
        ("Self-employed", WorkType::SelfEmployed),
    ];
}

/// Smoking history. "Unknown" is deliberately absent and encodes as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokingStatus {
    FormerlySmoked,
    NeverSmoked,
    Smokes,
}

impl Category for SmokingStatus {
    const TABLE: &'static [(&'static str, Self)] = &[
        ("formerly smoked", SmokingStatus::FormerlySmoked),
        ("never smoked", SmokingStatus::NeverSmoked),
        ("smokes", SmokingStatus::Smokes),
    ];
}

fn write_one_hot<C: Category>(out: &mut [f64], cell: &str) {
    if let Some(value) = C::from_cell(cell) {
        out[value.slot()] = 1.0;
    }
}

// ---------------------------------------------------------------------------
// Row drops
// ---------------------------------------------------------------------------

/// Why a record was left out of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Gender was neither "Male" nor "Female".
    Gender,
    /// BMI was the literal "N/A".
    MissingBmi,
    /// Fewer than [`RECORD_WIDTH`] cells.
    ShortRow,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Gender => write!(f, "unrecognised gender"),
            DropReason::MissingBmi => write!(f, "bmi is N/A"),
            DropReason::ShortRow => write!(f, "fewer than {RECORD_WIDTH} columns"),
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient numeric parsing
// ---------------------------------------------------------------------------

/// Parse a float cell; anything unparseable reads as 0.0.
fn lenient_f64(cell: &str) -> f64 {
    cell.parse().unwrap_or(0.0)
}

/// Parse an integer cell and widen it; anything unparseable reads as 0.0.
fn lenient_int(cell: &str) -> f64 {
    cell.parse::<i64>().map(|v| v as f64).unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encode one raw record into a [`Sample`].
///
/// Layout of the 16 features:
///
/// | idx    | column          | encoding                              |
/// |--------|-----------------|---------------------------------------|
/// | 0      | gender          | Male 0, Female 1, else drop           |
/// | 1      | age             | float                                 |
/// | 2      | hypertension    | int                                   |
/// | 3      | heart_disease   | int                                   |
/// | 4      | ever_married    | No 0, else 1                          |
/// | 5..10  | work_type       | one-hot [`WorkType`]                  |
/// | 10     | Residence_type  | Rural 0, else 1                       |
/// | 11     | avg_glucose     | float                                 |
/// | 12     | bmi             | float, "N/A" drops the row            |
/// | 13..16 | smoking_status  | one-hot [`SmokingStatus`]             |
///
/// Column 0 (id) is ignored. The stroke column becomes the label: exactly
/// `1` is positive, every other value (unparseable included) is negative.
pub fn encode_row<S: AsRef<str>>(cells: &[S]) -> Result<Sample, DropReason> {
    if cells.len() < RECORD_WIDTH {
        return Err(DropReason::ShortRow);
    }
    let cell = |i: usize| cells[i].as_ref();

    let mut features = [0.0; FEATURE_LEN];

    features[0] = match cell(COL_GENDER) {
        "Male" => 0.0,
        "Female" => 1.0,
        _ => return Err(DropReason::Gender),
    };
    features[1] = lenient_f64(cell(COL_AGE));
    features[2] = lenient_int(cell(COL_HYPERTENSION));
    features[3] = lenient_int(cell(COL_HEART_DISEASE));
    features[4] = if cell(COL_EVER_MARRIED) == "No" { 0.0 } else { 1.0 };
    write_one_hot::<WorkType>(
        &mut features[WORK_TYPE_AT..WORK_TYPE_AT + WorkType::TABLE.len()],
        cell(COL_WORK_TYPE),
    );
    features[10] = if cell(COL_RESIDENCE) == "Rural" { 0.0 } else { 1.0 };
    features[11] = lenient_f64(cell(COL_GLUCOSE));
    features[12] = match cell(COL_BMI) {
        "N/A" => return Err(DropReason::MissingBmi),
        bmi => lenient_f64(bmi),
    };
    write_one_hot::<SmokingStatus>(
        &mut features[SMOKING_AT..SMOKING_AT + SmokingStatus::TABLE.len()],
        cell(COL_SMOKING),
    );

    let label = match cell(COL_STROKE).parse::<i64>() {
        Ok(1) => POSITIVE,
        _ => NEGATIVE,
    };

    Ok(Sample { features, label })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(overrides: &[(usize, &'a str)]) -> Vec<&'a str> {
        let mut cells = vec![
            "9046",
            "Female",
            "45",
            "0",
            "1",
            "Yes",
            "Private",
            "Urban",
            "120.5",
            "28.1",
            "never smoked",
            "1",
        ];
        for &(i, v) in overrides {
            cells[i] = v;
        }
        cells
    }

    #[test]
    fn encodes_reference_record() {
        let sample = encode_row(&row(&[])).unwrap();
        assert_eq!(sample.label, 1.0);
        assert_eq!(
            sample.features,
            [
                1.0, 45.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 120.5, 28.1, 0.0, 1.0,
                0.0
            ]
        );
    }

    #[test]
    fn male_rural_unmarried() {
        let sample = encode_row(&row(&[(1, "Male"), (5, "No"), (7, "Rural")])).unwrap();
        assert_eq!(sample.features[0], 0.0);
        assert_eq!(sample.features[4], 0.0);
        assert_eq!(sample.features[10], 0.0);
    }

    #[test]
    fn other_gender_is_dropped() {
        assert_eq!(encode_row(&row(&[(1, "Other")])), Err(DropReason::Gender));
    }

    #[test]
    fn missing_bmi_is_dropped() {
        assert_eq!(encode_row(&row(&[(9, "N/A")])), Err(DropReason::MissingBmi));
    }

    #[test]
    fn short_row_is_dropped() {
        assert_eq!(encode_row(&["1", "Male", "30"]), Err(DropReason::ShortRow));
    }

    #[test]
    fn unparseable_numbers_default_to_zero() {
        let sample = encode_row(&row(&[(2, "abc"), (3, "1.5"), (8, ""), (9, "n/a")])).unwrap();
        assert_eq!(sample.features[1], 0.0);
        assert_eq!(sample.features[2], 0.0);
        assert_eq!(sample.features[11], 0.0);
        assert_eq!(sample.features[12], 0.0);
    }

    #[test]
    fn each_work_type_sets_its_own_slot() {
        for (slot, &(name, _)) in WorkType::TABLE.iter().enumerate() {
            let sample = encode_row(&row(&[(6, name)])).unwrap();
            let one_hot = &sample.features[WORK_TYPE_AT..WORK_TYPE_AT + 5];
            assert_eq!(one_hot.iter().sum::<f64>(), 1.0, "{name}");
            assert_eq!(one_hot[slot], 1.0, "{name}");
        }
    }

    #[test]
    fn unknown_categories_encode_as_zeros() {
        let sample = encode_row(&row(&[(6, "Astronaut"), (10, "Unknown")])).unwrap();
        assert!(sample.features[5..10].iter().all(|&v| v == 0.0));
        assert!(sample.features[13..16].iter().all(|&v| v == 0.0));
        assert_eq!(sample.features.len(), FEATURE_LEN);
    }

    #[test]
    fn smoking_slots_follow_table_order() {
        let sample = encode_row(&row(&[(10, "smokes")])).unwrap();
        assert_eq!(&sample.features[13..16], &[0.0, 0.0, 1.0]);
        assert_eq!(SmokingStatus::from_cell("formerly smoked").map(|s| s.slot()), Some(0));
    }

    #[test]
    fn non_positive_stroke_is_negative() {
        for stroke in ["0", "2", "yes", ""] {
            let sample = encode_row(&row(&[(11, stroke)])).unwrap();
            assert_eq!(sample.label, 0.0, "stroke={stroke:?}");
        }
    }
}
