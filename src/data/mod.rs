/// Data layer: record encoding, loading, balancing and splitting.
///
/// Architecture:
/// ```text
///  stroke .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header skip, encoder per row, positive rows ×N
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  parallel labels / 16-wide inputs
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  balance  │  oversample positives up to the negative count
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split    │  seeded shuffle → (train, validation)
///   └──────────┘
/// ```

pub mod balance;
pub mod encoder;
pub mod loader;
pub mod model;
pub mod split;

pub use model::{Dataset, FEATURE_LEN, Sample};
