use super::model::{SummaryMetrics, TimeSeriesSlice};

// ---------------------------------------------------------------------------
// Summary statistics over a time-series slice
// ---------------------------------------------------------------------------

/// Summarize a time-series slice.
///
/// Returns `None` for an empty slice so callers render a placeholder
/// instead of a misleading all-zero bundle. The percent change is only
/// reported for slices with at least two rows; when the first row's value
/// is zero the change is reported as `0.0` rather than dividing by zero.
pub fn summarize(slice: &TimeSeriesSlice) -> Option<SummaryMetrics> {
    let first = slice.first()?;

    let total: f64 = slice.iter().map(|obs| obs.co2).sum();
    let mean = total / slice.len() as f64;

    // Earliest year wins ties: only a strictly larger value displaces the peak.
    let mut peak = first;
    for obs in &slice[1..] {
        if obs.co2 > peak.co2 {
            peak = obs;
        }
    }

    let change_percent = if slice.len() >= 2 {
        let last = slice.last()?;
        Some(if first.co2 != 0.0 {
            (last.co2 - first.co2) / first.co2 * 100.0
        } else {
            0.0
        })
    } else {
        None
    };

    Some(SummaryMetrics {
        total,
        mean,
        peak_year: peak.year,
        peak_value: peak.co2,
        change_percent,
    })
}
