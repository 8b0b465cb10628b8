/// Data layer: core types, loading, filtering, and summary metrics.
///
/// Architecture:
/// ```text
///  remote CSV (OWID) / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch once (memoized), parse → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Observation>, entity + year index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → TimeSeriesSlice, RankingSnapshot
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  TimeSeriesSlice → SummaryMetrics
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
