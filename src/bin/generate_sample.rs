use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const HEADER: [&str; 12] = [
    "id",
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "ever_married",
    "work_type",
    "Residence_type",
    "avg_glucose_level",
    "bmi",
    "smoking_status",
    "stroke",
];

const WORK_TYPES: [&str; 5] = ["children", "Govt_job", "Never_worked", "Private", "Self-employed"];
const SMOKING: [&str; 4] = ["formerly smoked", "never smoked", "smokes", "Unknown"];

/// One synthetic patient record, already formatted as CSV cells.
fn generate_row(id: usize, rng: &mut StdRng) -> Vec<String> {
    let gender = match rng.random_range(0..100) {
        0 => "Other",
        n if n < 55 => "Female",
        _ => "Male",
    };
    let age: f64 = rng.random_range(1.0..82.0);
    let hypertension = rng.random_bool((age / 400.0).min(0.3));
    let heart_disease = rng.random_bool((age / 800.0).min(0.15));
    let married = age > 25.0 && rng.random_bool(0.7);
    let work_type = if age < 16.0 {
        "children"
    } else {
        WORK_TYPES[1..].choose(rng).copied().unwrap_or("Private")
    };
    let residence = if rng.random_bool(0.5) { "Urban" } else { "Rural" };
    let glucose: f64 = rng.random_range(55.0..270.0);
    let bmi = if rng.random_bool(0.04) {
        "N/A".to_string()
    } else {
        format!("{:.1}", rng.random_range(14.0..48.0))
    };
    let smoking = SMOKING.choose(rng).copied().unwrap_or("Unknown");

    // Risk grows with age and comorbidities; roughly 5% positive overall.
    let risk = 0.01
        + (age / 82.0) * 0.06
        + if hypertension { 0.04 } else { 0.0 }
        + if heart_disease { 0.05 } else { 0.0 };
    let stroke = rng.random_bool(risk.min(1.0));

    vec![
        id.to_string(),
        gender.to_string(),
        format!("{age:.0}"),
        u8::from(hypertension).to_string(),
        u8::from(heart_disease).to_string(),
        if married { "Yes" } else { "No" }.to_string(),
        work_type.to_string(),
        residence.to_string(),
        format!("{glucose:.2}"),
        bmi,
        smoking.to_string(),
        u8::from(stroke).to_string(),
    ]
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "sample_stroke_data.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}'"))?,
        None => 5000,
    };

    let mut rng = StdRng::seed_from_u64(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(HEADER)?;
    for id in 0..rows {
        writer.write_record(generate_row(id, &mut rng))?;
    }
    writer.flush()?;

    println!("Wrote {rows} records to {output_path}");
    Ok(())
}
