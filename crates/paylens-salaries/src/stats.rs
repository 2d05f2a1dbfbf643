//! Aggregate statistics over salary amounts.
//!
//! Percentiles use linear interpolation between ranks: the value at
//! percentile p of n sorted amounts sits at position (n - 1) * p / 100,
//! interpolating between the two neighbouring samples when the position is
//! fractional. Sorted [10, 20, 30, 40] gives P25 = 17.5, P50 = 25,
//! P75 = 32.5.

use serde::{Deserialize, Serialize};

/// Summary of a filtered set of salary amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
}

/// Sorts the amounts and computes the full summary. Empty input yields the
/// all-zero summary.
pub fn summarize(mut amounts: Vec<f64>) -> SalaryStats {
    if amounts.is_empty() {
        return SalaryStats::default();
    }
    amounts.sort_unstable_by(f64::total_cmp);

    let count = amounts.len();
    let average = amounts.iter().sum::<f64>() / count as f64;

    SalaryStats {
        count,
        average,
        median: percentile(&amounts, 50.0),
        p25: percentile(&amounts, 25.0),
        p75: percentile(&amounts, 75.0),
    }
}

/// Value at the given percentile of an ascending-sorted slice.
///
/// Out-of-range percentiles clamp to the first/last sample.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if pct <= 0.0 {
        return sorted[0];
    }
    if pct >= 100.0 {
        return sorted[sorted.len() - 1];
    }

    let position = (sorted.len() - 1) as f64 * (pct / 100.0);
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;

    match sorted.get(lower + 1) {
        Some(upper) => sorted[lower] + (upper - sorted[lower]) * fraction,
        None => sorted[lower],
    }
}
