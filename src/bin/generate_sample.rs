use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT: &str = "sample_co2.csv";
const FIRST_YEAR: i32 = 1990;
const LAST_YEAR: i32 = 2023;

/// Entities in the sample: name, ISO code, 1990 emissions (Mt), 1990
/// population (0 means the aggregate carries no population).
const ENTITIES: [(&str, &str, f64, u64); 11] = [
    ("United States", "USA", 4_800.0, 250_000_000),
    ("China", "CHN", 2_170.0, 1_135_000_000),
    ("India", "IND", 580.0, 870_000_000),
    ("Japan", "JPN", 1_150.0, 123_000_000),
    ("Germany", "DEU", 1_020.0, 79_000_000),
    ("Brazil", "BRA", 220.0, 149_000_000),
    ("World", "OWID_WRL", 20_500.0, 5_300_000_000),
    ("Asia", "", 9_000.0, 0),
    ("Europe", "", 7_900.0, 0),
    ("Africa", "", 715.0, 0),
    ("International Transport", "", 600.0, 0),
];

/// One output row, in the shape of the OWID CO₂ table.
#[derive(Serialize)]
struct SampleRow {
    country: String,
    year: i32,
    iso_code: String,
    co2: String,
    co2_per_capita: String,
    population: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(OUTPUT).context("creating sample CSV")?;
    let mut rows = 0usize;

    for (name, iso_code, base_co2, base_population) in ENTITIES {
        let mut co2 = base_co2;
        let mut population = base_population as f64;

        for year in FIRST_YEAR..=LAST_YEAR {
            // Emissions as a bounded multiplicative random walk.
            co2 = (co2 * (1.0 + rng.gauss(0.012, 0.02))).max(0.0);
            population *= 1.0 + rng.gauss(0.008, 0.002);

            // The real export has gaps; leave the occasional cell blank.
            let blank_co2 = rng.next_f64() < 0.02;
            let has_population = base_population > 0;

            let co2_cell = if blank_co2 {
                String::new()
            } else {
                format!("{co2:.3}")
            };
            let per_capita_cell = if blank_co2 || !has_population {
                String::new()
            } else {
                format!("{:.3}", co2 * 1.0e6 / population)
            };
            let population_cell = if has_population {
                format!("{}", population as u64)
            } else {
                String::new()
            };

            writer.serialize(SampleRow {
                country: name.to_string(),
                year,
                iso_code: iso_code.to_string(),
                co2: co2_cell,
                co2_per_capita: per_capita_cell,
                population: population_cell,
            })?;
            rows += 1;
        }
    }

    writer.flush().context("writing sample CSV")?;
    println!("Wrote {rows} rows to {OUTPUT}");
    Ok(())
}
