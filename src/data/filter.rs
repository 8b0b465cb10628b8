use super::model::{Dataset, RankingSnapshot, Selection, TimeSeriesSlice};

// ---------------------------------------------------------------------------
// Derived views: time series and ranking
// ---------------------------------------------------------------------------

/// Aggregate entities excluded from the per-country ranking.
pub const AGGREGATE_ENTITIES: [&str; 6] = [
    "World",
    "International Transport",
    "Oceania",
    "Asia",
    "Europe",
    "Africa",
];

/// How many rows a ranking snapshot holds at most.
pub const RANKING_SIZE: usize = 10;

/// Rows for the selected entity within the year interval, ascending by year.
///
/// `Global` reads the "World" entity's totals. An unknown entity, or an
/// interval with no data, yields an empty slice rather than an error.
pub fn derive_time_series(dataset: &Dataset, selection: &Selection) -> TimeSeriesSlice {
    let target = selection.entity.match_target();
    let mut rows: TimeSeriesSlice = dataset
        .observations
        .iter()
        .filter(|obs| {
            obs.country == target
                && obs.year >= selection.start_year
                && obs.year <= selection.end_year
        })
        .cloned()
        .collect();
    // Source rows are year-ordered per entity, but that is incidental.
    rows.sort_by_key(|obs| obs.year);
    rows
}

/// The top emitters for `end_year`, aggregates excluded, descending by
/// `co2`. Ties are broken by entity name so repeated calls agree.
pub fn derive_ranking(dataset: &Dataset, end_year: i32) -> RankingSnapshot {
    let mut rows: RankingSnapshot = dataset
        .observations
        .iter()
        .filter(|obs| {
            obs.year == end_year && !AGGREGATE_ENTITIES.contains(&obs.country.as_str())
        })
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.co2.total_cmp(&a.co2).then_with(|| a.country.cmp(&b.country)));
    rows.truncate(RANKING_SIZE);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EntityChoice, Observation};

    fn obs(country: &str, year: i32, co2: f64) -> Observation {
        Observation {
            country: country.to_string(),
            year,
            co2,
            co2_per_capita: None,
            population: None,
            extra: Default::default(),
        }
    }

    fn selection(entity: EntityChoice, start_year: i32, end_year: i32) -> Selection {
        Selection {
            entity,
            start_year,
            end_year,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_observations(vec![
            obs("World", 2019, 36_000.0),
            obs("World", 2020, 34_000.0),
            obs("Asia", 2020, 20_000.0),
            obs("China", 2020, 10_600.0),
            obs("United States", 2019, 5_100.0),
            obs("United States", 2020, 4_700.0),
            obs("India", 2020, 2_400.0),
        ])
    }

    #[test]
    fn time_series_is_year_bounded_and_sorted() {
        let ds = Dataset::from_observations(vec![
            obs("United States", 2021, 5.0),
            obs("United States", 2019, 3.0),
            obs("United States", 2020, 4.0),
            obs("United States", 1999, 1.0),
            obs("China", 2020, 9.0),
        ]);
        let sel = selection(EntityChoice::Entity("United States".to_string()), 2019, 2021);
        let slice = derive_time_series(&ds, &sel);
        let years: Vec<i32> = slice.iter().map(|o| o.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
        assert!(slice.iter().all(|o| o.country == "United States"));
    }

    #[test]
    fn global_selects_world_rows() {
        let slice = derive_time_series(&dataset(), &selection(EntityChoice::Global, 2019, 2020));
        assert_eq!(slice.len(), 2);
        assert!(slice.iter().all(|o| o.country == "World"));
        assert_eq!(slice[0].co2, 36_000.0);
        assert_eq!(slice[1].co2, 34_000.0);
    }

    #[test]
    fn unknown_entity_yields_empty_slice() {
        let sel = selection(EntityChoice::Entity("Atlantis".to_string()), 2019, 2020);
        assert!(derive_time_series(&dataset(), &sel).is_empty());
    }

    #[test]
    fn ranking_excludes_aggregates_and_sorts_descending() {
        let ranking = derive_ranking(&dataset(), 2020);
        let names: Vec<&str> = ranking.iter().map(|o| o.country.as_str()).collect();
        assert_eq!(names, vec!["China", "United States", "India"]);
        assert!(ranking
            .iter()
            .all(|o| !AGGREGATE_ENTITIES.contains(&o.country.as_str())));
        assert!(ranking.windows(2).all(|w| w[0].co2 >= w[1].co2));
    }

    #[test]
    fn ranking_caps_at_ten() {
        let rows = (0..15)
            .map(|i| obs(&format!("Country {i:02}"), 2020, i as f64))
            .collect();
        let ranking = derive_ranking(&Dataset::from_observations(rows), 2020);
        assert_eq!(ranking.len(), RANKING_SIZE);
        assert_eq!(ranking[0].country, "Country 14");
    }

    #[test]
    fn ranking_with_few_rows_returns_all() {
        let ranking = derive_ranking(&dataset(), 2019);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].country, "United States");
    }

    #[test]
    fn ranking_tie_break_is_deterministic() {
        let ds = Dataset::from_observations(vec![
            obs("Borduria", 2020, 500.0),
            obs("Syldavia", 2020, 300.0),
            obs("Arendelle", 2020, 500.0),
        ]);
        let first = derive_ranking(&ds, 2020);
        let second = derive_ranking(&ds, 2020);
        let names: Vec<&str> = first.iter().map(|o| o.country.as_str()).collect();
        assert_eq!(names, vec!["Arendelle", "Borduria", "Syldavia"]);
        assert_eq!(first, second);
    }
}
