use std::collections::{BTreeMap, BTreeSet};

/// Entity carrying the aggregated world totals in the source table.
pub const WORLD_ENTITY: &str = "World";

/// Entity selected by default when the dataset contains it.
pub const DEFAULT_ENTITY: &str = "United States";

/// First year of the default selection interval.
const DEFAULT_START_YEAR: i32 = 2000;

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single yearly emissions record (one row of the source CSV).
///
/// `(country, year)` is unique within the source dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Entity name: a country or a geographic/political aggregate.
    pub country: String,
    /// Calendar year.
    pub year: i32,
    /// Annual CO₂ emissions in million tonnes. Missing cells become 0.0 at load.
    pub co2: f64,
    /// Per-capita emissions in tonnes, where reported.
    pub co2_per_capita: Option<f64>,
    /// Population, where reported.
    pub population: Option<u64>,
    /// All other source columns, passed through untouched: column → raw cell.
    pub extra: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed entity and year indices.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All observations (rows), in source order.
    pub observations: Vec<Observation>,
    /// Sorted unique entity names.
    pub entities: Vec<String>,
    /// Smallest year present (0 when empty).
    pub min_year: i32,
    /// Largest year present (0 when empty).
    pub max_year: i32,
}

impl Dataset {
    /// Build entity and year indices from the loaded observations.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut entity_set: BTreeSet<String> = BTreeSet::new();
        let mut min_year = i32::MAX;
        let mut max_year = i32::MIN;

        for obs in &observations {
            entity_set.insert(obs.country.clone());
            min_year = min_year.min(obs.year);
            max_year = max_year.max(obs.year);
        }
        if observations.is_empty() {
            min_year = 0;
            max_year = 0;
        }

        Dataset {
            observations,
            entities: entity_set.into_iter().collect(),
            min_year,
            max_year,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selection – user-chosen filter parameters
// ---------------------------------------------------------------------------

/// The entity the time series is computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityChoice {
    /// Aggregate view backed by the "World" entity's totals.
    Global,
    /// A specific country or entity by name.
    Entity(String),
}

impl EntityChoice {
    /// Name shown in the UI.
    pub fn label(&self) -> &str {
        match self {
            EntityChoice::Global => "Global",
            EntityChoice::Entity(name) => name,
        }
    }

    /// The entity name rows must carry to match this choice.
    pub fn match_target(&self) -> &str {
        match self {
            EntityChoice::Global => WORLD_ENTITY,
            EntityChoice::Entity(name) => name,
        }
    }
}

/// Entity plus inclusive year interval, `start_year <= end_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub entity: EntityChoice,
    pub start_year: i32,
    pub end_year: i32,
}

impl Selection {
    /// Initial selection for a freshly loaded dataset: the United States from
    /// 2000 onwards (clamped to the dataset bounds), falling back to the
    /// global view when that entity is absent.
    pub fn default_for(dataset: &Dataset) -> Self {
        let entity = if dataset.entities.iter().any(|e| e == DEFAULT_ENTITY) {
            EntityChoice::Entity(DEFAULT_ENTITY.to_string())
        } else {
            EntityChoice::Global
        };
        Selection {
            entity,
            start_year: DEFAULT_START_YEAR.clamp(dataset.min_year, dataset.max_year),
            end_year: dataset.max_year,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived collections and summary
// ---------------------------------------------------------------------------

/// Ascending-by-year rows for one entity across a year interval.
pub type TimeSeriesSlice = Vec<Observation>;

/// Top emitters for a single year, ranked by descending `co2`.
pub type RankingSnapshot = Vec<Observation>;

/// Scalar summary derived from a [`TimeSeriesSlice`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    /// Sum of `co2` over the slice.
    pub total: f64,
    /// Mean annual `co2` over the slice.
    pub mean: f64,
    /// Year of the highest `co2` value (earliest year on ties).
    pub peak_year: i32,
    /// The highest `co2` value.
    pub peak_value: f64,
    /// Percent change from the first to the last row; only present when the
    /// slice has at least two rows.
    pub change_percent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(country: &str, year: i32) -> Observation {
        Observation {
            country: country.to_string(),
            year,
            co2: 1.0,
            co2_per_capita: None,
            population: None,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn indices_are_computed() {
        let ds = Dataset::from_observations(vec![
            obs("World", 1990),
            obs("Chile", 2020),
            obs("Chile", 1991),
        ]);
        assert_eq!(ds.entities, vec!["Chile".to_string(), "World".to_string()]);
        assert_eq!(ds.min_year, 1990);
        assert_eq!(ds.max_year, 2020);
    }

    #[test]
    fn empty_dataset_has_zero_year_bounds() {
        let ds = Dataset::from_observations(Vec::new());
        assert!(ds.is_empty());
        assert_eq!((ds.min_year, ds.max_year), (0, 0));
    }

    #[test]
    fn default_selection_prefers_united_states() {
        let ds = Dataset::from_observations(vec![
            obs("United States", 1995),
            obs("United States", 2022),
        ]);
        let sel = Selection::default_for(&ds);
        assert_eq!(sel.entity, EntityChoice::Entity("United States".to_string()));
        assert_eq!((sel.start_year, sel.end_year), (2000, 2022));
    }

    #[test]
    fn default_selection_falls_back_to_global() {
        let ds = Dataset::from_observations(vec![obs("World", 2020), obs("World", 2021)]);
        let sel = Selection::default_for(&ds);
        assert_eq!(sel.entity, EntityChoice::Global);
        // 2000 is outside the dataset, so the interval clamps to its bounds.
        assert_eq!((sel.start_year, sel.end_year), (2020, 2021));
    }
}
