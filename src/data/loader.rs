use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Remote source
// ---------------------------------------------------------------------------

/// Fixed remote location of the Our World in Data CO₂ table.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/owid/co2-data/master/owid-co2-data.csv";

/// Columns the dashboard depends on. Anything else rides along in
/// [`Observation::extra`].
const REQUIRED_COLUMNS: [&str; 5] = ["country", "year", "co2", "co2_per_capita", "population"];

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors raised while ingesting the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching dataset: {0}")]
    Network(#[from] reqwest::Error),
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("opening file: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: '{value}' is not a valid {column}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

static DATASET: OnceCell<Result<Dataset, LoadError>> = OnceCell::new();

/// Load the remote dataset, fetching at most once per process lifetime.
///
/// Transport failures are logged and degrade to an empty dataset; callers
/// check [`Dataset::is_empty`] and render the empty state instead of
/// crashing. Schema and parse failures are real errors and propagate.
pub fn load() -> &'static Result<Dataset, LoadError> {
    DATASET.get_or_init(|| {
        let text = match fetch_text(DATA_URL) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to fetch {DATA_URL}: {e}");
                return Ok(Dataset::default());
            }
        };
        parse_dataset(text.as_bytes())
    })
}

/// Load a dataset from a local CSV file (File → Open…). Not memoized.
pub fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path)?;
    parse_dataset(std::io::BufReader::new(file))
}

fn fetch_text(url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse OWID-shaped CSV into a [`Dataset`].
///
/// `year` must parse as a whole number (a float spelling like `1990.0` is
/// accepted). Empty or unparsable `co2` cells become `0.0`; the nullable
/// columns become `None`. Every other column is kept verbatim in
/// [`Observation::extra`].
pub fn parse_dataset<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut required = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }
    let [country_idx, year_idx, co2_idx, per_capita_idx, population_idx] = required;

    let mut observations = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let year_cell = record.get(year_idx).unwrap_or("");
        let year = parse_year(year_cell).ok_or_else(|| LoadError::InvalidValue {
            row: row_no,
            column: "year",
            value: year_cell.to_string(),
        })?;

        let co2 = record.get(co2_idx).and_then(parse_f64).unwrap_or(0.0);
        let co2_per_capita = record.get(per_capita_idx).and_then(parse_f64);
        let population = record.get(population_idx).and_then(parse_u64);

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if required.contains(&col_idx) {
                continue;
            }
            extra.insert(headers[col_idx].clone(), value.to_string());
        }

        observations.push(Observation {
            country: record.get(country_idx).unwrap_or("").to_string(),
            year,
            co2,
            co2_per_capita,
            population,
            extra,
        });
    }

    Ok(Dataset::from_observations(observations))
}

/// Parse a year cell. Whole-number float spellings (`"1990.0"`) occur in
/// exported CSVs and are accepted; anything fractional is rejected.
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
            Some(f as i32)
        }
        _ => None,
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

fn parse_u64(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    // Population is exported as a float in some dumps.
    match s.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 => Some(f as u64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
country,year,iso_code,co2,co2_per_capita,population
Testland,2019,TST,100.5,8.1,12400000
Testland,2020,TST,,7.9,
World,2020,OWID_WRL,34000,,7800000000
";

    #[test]
    fn parses_rows_and_indices() {
        let ds = parse_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.entities, vec!["Testland".to_string(), "World".to_string()]);
        assert_eq!((ds.min_year, ds.max_year), (2019, 2020));

        let first = &ds.observations[0];
        assert_eq!(first.country, "Testland");
        assert_eq!(first.year, 2019);
        assert_eq!(first.co2, 100.5);
        assert_eq!(first.co2_per_capita, Some(8.1));
        assert_eq!(first.population, Some(12_400_000));
    }

    #[test]
    fn blank_cells_are_cleaned() {
        let ds = parse_dataset(SAMPLE.as_bytes()).unwrap();
        let second = &ds.observations[1];
        assert_eq!(second.co2, 0.0);
        assert_eq!(second.population, None);
        let third = &ds.observations[2];
        assert_eq!(third.co2_per_capita, None);
    }

    #[test]
    fn extra_columns_survive() {
        let ds = parse_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            ds.observations[2].extra.get("iso_code"),
            Some(&"OWID_WRL".to_string())
        );
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let input = "country,year,co2\nTestland,2019,1.0\n";
        let err = parse_dataset(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("co2_per_capita")));
    }

    #[test]
    fn unparsable_year_is_an_error() {
        let input = "\
country,year,co2,co2_per_capita,population
Testland,19x0,1.0,,
";
        let err = parse_dataset(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidValue { column: "year", .. }
        ));
    }

    #[test]
    fn whole_number_float_year_is_coerced() {
        let input = "\
country,year,co2,co2_per_capita,population
Testland,1990.0,1.0,,
";
        let ds = parse_dataset(input.as_bytes()).unwrap();
        assert_eq!(ds.observations[0].year, 1990);
    }

    #[test]
    fn header_only_input_is_empty_not_an_error() {
        let input = "country,year,co2,co2_per_capita,population\n";
        let ds = parse_dataset(input.as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!((ds.min_year, ds.max_year), (0, 0));
    }
}
