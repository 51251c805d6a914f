//! Frequency distribution tables for grouped data.
//!
//! The table follows the classroom recipe for building classes by hand:
//!
//! 1. Number of classes by **Sturges' rule**: `k = ⌈log₂ n + 1⌉`
//! 2. Class width: `w = ⌈range / k⌉`, rounded up to a whole number of
//!    class units `u` (the measurement step, `1` for integer data)
//! 3. Class `i` covers `[min + i·w, min + (i+1)·w)`; the last class also
//!    includes its upper end so the maximum is always counted
//! 4. Labels use the "stated limits" convention: the interval of a class is
//!    `lower .. upper - u`, its true boundaries sit half a unit outside,
//!    and the midpoint is the centre of the stated limits
//! 5. Empty classes are dropped
//!
//! # Examples
//!
//! ```
//! use vesna::frequency::FrequencyTable;
//!
//! let data = [10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0];
//! let table = FrequencyTable::new(&data).unwrap();
//!
//! assert_eq!(table.class_count, 4);
//! assert_eq!(table.rows[0].interval, "10 - 17");
//! assert_eq!(table.rows[0].boundaries, "9.5 - 17.5");
//! assert_eq!(table.rows[0].frequency, 2);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

/// One class of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRow {
    /// Inclusive lower limit.
    pub lower: f64,
    /// Exclusive upper limit (inclusive for the last class).
    pub upper: f64,
    /// Stated limits, e.g. `"10 - 17"`.
    pub interval: String,
    /// Class boundaries, e.g. `"9.5 - 17.5"`.
    pub boundaries: String,
    /// Centre of the stated limits.
    pub midpoint: f64,
    /// Number of observations in the class.
    pub frequency: usize,
    /// `frequency / n`.
    pub relative_frequency: f64,
    /// Running total of frequencies up to and including this class.
    pub cumulative_frequency: usize,
}

/// Sturges-rule frequency distribution of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Classes created before empty ones were dropped.
    pub class_count: usize,
    /// Distance between consecutive lower limits.
    pub class_width: f64,
    /// Measurement step used for limits and boundaries.
    pub class_unit: f64,
    /// Non-empty classes in ascending order.
    pub rows: Vec<ClassRow>,
}

/// Number of classes for `n` observations by Sturges' rule.
///
/// ```
/// assert_eq!(vesna::frequency::sturges_classes(1), 1);
/// assert_eq!(vesna::frequency::sturges_classes(7), 4);
/// assert_eq!(vesna::frequency::sturges_classes(100), 8);
/// ```
#[must_use]
pub fn sturges_classes(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((n as f64).log2() + 1.0).ceil() as usize
}

/// Round away binary noise such as `0.30000000000000004` before printing.
fn tidy(x: f64) -> f64 {
    let t = (x * 1e9).round() / 1e9;
    // avoid printing "-0"
    t + 0.0
}

impl FrequencyTable {
    /// Builds the table for integer-valued data (class unit 1).
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn new(data: &[f64]) -> Option<Self> {
        Self::with_unit(data, 1.0)
    }

    /// Builds the table with an explicit class unit.
    ///
    /// Use the precision the data were measured to, e.g. `0.1` for values
    /// with one decimal. A non-positive unit is treated as `1`.
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn with_unit(data: &[f64], class_unit: f64) -> Option<Self> {
        let unit = if class_unit > 0.0 { class_unit } else { 1.0 };

        let min = data.iter().copied().reduce(f64::min)?;
        let max = data.iter().copied().reduce(f64::max)?;
        let range = max - min;

        let k = sturges_classes(data.len());
        // whole units per class; `tidy` keeps 1.0000000000000002 from becoming 2
        let units = tidy(range / k as f64 / unit).ceil().max(1.0);
        let width = units * unit;
        debug!("frequency table: n={} range={range} classes={k} width={width}", data.len());

        let tolerance = unit * 1e-9;
        let counts: Vec<usize> = (0..k)
            .map(|i| {
                let lower = min + i as f64 * width - tolerance;
                let upper = min + (i + 1) as f64 * width - tolerance;
                let last = i + 1 == k;
                // last class is closed on the right
                data.iter()
                    .filter(|&&x| {
                        x >= lower && (x < upper || (last && x <= upper + 2.0 * tolerance))
                    })
                    .count()
            })
            .collect();

        let n = data.len() as f64;
        let mut cumulative = 0;
        let rows = counts
            .into_iter()
            .enumerate()
            .filter(|&(_, frequency)| frequency > 0)
            .map(|(i, frequency)| {
                let lower = min + i as f64 * width;
                let upper = min + (i + 1) as f64 * width;
                cumulative += frequency;
                ClassRow {
                    lower,
                    upper,
                    interval: format!("{} - {}", tidy(lower), tidy(upper - unit)),
                    boundaries: format!(
                        "{} - {}",
                        tidy(lower - unit / 2.0),
                        tidy(upper - unit / 2.0)
                    ),
                    midpoint: (lower + upper - unit) / 2.0,
                    frequency,
                    relative_frequency: frequency as f64 / n,
                    cumulative_frequency: cumulative,
                }
            })
            .collect();

        Some(Self {
            class_count: k,
            class_width: width,
            class_unit: unit,
            rows,
        })
    }

    /// Total number of observations in the table.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.frequency).sum()
    }

    /// `Σ fᵢ (mᵢ - mean)² / Σ fᵢ` over the class midpoints.
    #[must_use]
    pub fn grouped_variance(&self, mean: f64) -> f64 {
        let (weighted, total) = self.rows.iter().fold((0.0, 0_usize), |(acc, n), row| {
            let dev = row.midpoint - mean;
            (acc + row.frequency as f64 * dev * dev, n + row.frequency)
        });
        weighted / total as f64
    }

    /// Mean estimated from the midpoints alone.
    #[must_use]
    pub fn grouped_mean(&self) -> f64 {
        let weighted: f64 = self
            .rows
            .iter()
            .map(|r| r.frequency as f64 * r.midpoint)
            .sum();
        weighted / self.total() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn classroom() -> FrequencyTable {
        FrequencyTable::new(&[10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0]).unwrap()
    }

    #[test]
    fn sturges_rule() {
        assert_eq!(sturges_classes(0), 0);
        assert_eq!(sturges_classes(2), 2);
        assert_eq!(sturges_classes(8), 4);
        assert_eq!(sturges_classes(9), 5);
        assert_eq!(sturges_classes(1000), 11);
    }

    #[test]
    fn classroom_example_rows() {
        let table = classroom();
        assert_eq!(table.class_count, 4);
        assert_abs_diff_eq!(table.class_width, 8.0);

        let intervals: Vec<&str> = table.rows.iter().map(|r| r.interval.as_str()).collect();
        assert_eq!(intervals, ["10 - 17", "18 - 25", "26 - 33", "34 - 41"]);

        let boundaries: Vec<&str> = table.rows.iter().map(|r| r.boundaries.as_str()).collect();
        assert_eq!(boundaries, ["9.5 - 17.5", "17.5 - 25.5", "25.5 - 33.5", "33.5 - 41.5"]);

        let freqs: Vec<usize> = table.rows.iter().map(|r| r.frequency).collect();
        assert_eq!(freqs, [2, 2, 1, 2]);

        let mids: Vec<f64> = table.rows.iter().map(|r| r.midpoint).collect();
        for (got, want) in mids.iter().zip([13.5, 21.5, 29.5, 37.5]) {
            assert_abs_diff_eq!(*got, want);
        }
    }

    #[test]
    fn cumulative_and_relative_frequencies() {
        let table = classroom();
        let cumulative: Vec<usize> = table.rows.iter().map(|r| r.cumulative_frequency).collect();
        assert_eq!(cumulative, [2, 4, 5, 7]);
        let total_relative: f64 = table.rows.iter().map(|r| r.relative_frequency).sum();
        assert_abs_diff_eq!(total_relative, 1.0, epsilon = 1e-12);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn maximum_lands_in_last_class() {
        // range 8, k = 4, width 2: the max sits exactly on the upper limit
        let table = FrequencyTable::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0]).unwrap();
        let last = table.rows.last().unwrap();
        assert_eq!(last.interval, "6 - 7");
        assert_eq!(last.frequency, 2);
        assert_eq!(table.total(), 8);
    }

    #[test]
    fn empty_classes_are_dropped() {
        let table = FrequencyTable::new(&[1.0, 2.0, 3.0, 100.0]).unwrap();
        assert_eq!(table.class_count, 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn constant_data_gets_one_unit_class() {
        let table = FrequencyTable::new(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(table.rows.len(), 1);
        let row = table.rows.first().unwrap();
        assert_eq!(row.interval, "5 - 5");
        assert_eq!(row.boundaries, "4.5 - 5.5");
        assert_abs_diff_eq!(row.midpoint, 5.0);
        assert_abs_diff_eq!(table.grouped_variance(5.0), 0.0);
    }

    #[test]
    fn decimal_unit_labels() {
        let table = FrequencyTable::with_unit(&[1.2, 1.5, 1.9, 2.4, 2.8], 0.1).unwrap();
        // k = 4, range 1.6 → width 0.4
        assert_abs_diff_eq!(table.class_width, 0.4, epsilon = 1e-12);
        let first = table.rows.first().unwrap();
        assert_eq!(first.interval, "1.2 - 1.5");
        assert_eq!(first.boundaries, "1.15 - 1.55");
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn decimal_unit_width_ignores_rounding_noise() {
        // 0.3 / 3 / 0.1 evaluates to 1.0000000000000002
        let table = FrequencyTable::with_unit(&[0.1, 0.2, 0.3, 0.4], 0.1).unwrap();
        assert_eq!(table.class_count, 3);
        assert_abs_diff_eq!(table.class_width, 0.1, epsilon = 1e-12);

        let rows: Vec<(&str, usize)> = table
            .rows
            .iter()
            .map(|r| (r.interval.as_str(), r.frequency))
            .collect();
        assert_eq!(rows, [("0.1 - 0.1", 1), ("0.2 - 0.2", 1), ("0.3 - 0.3", 2)]);
    }

    #[test]
    fn values_on_a_decimal_limit_start_the_next_class() {
        // 1.2 + 3 · 0.4 is 2.4000000000000004, yet 2.4 belongs to the last class
        let table = FrequencyTable::with_unit(&[1.2, 1.5, 1.9, 2.4, 2.8], 0.1).unwrap();
        let rows: Vec<(&str, usize)> = table
            .rows
            .iter()
            .map(|r| (r.interval.as_str(), r.frequency))
            .collect();
        assert_eq!(rows, [("1.2 - 1.5", 2), ("1.6 - 1.9", 1), ("2.4 - 2.7", 2)]);
    }

    #[test]
    fn empty_sample_has_no_table() {
        assert!(FrequencyTable::new(&[]).is_none());
    }

    #[test]
    fn grouped_mean_uses_midpoints() {
        let table = classroom();
        let expected = (2.0 * 13.5 + 2.0 * 21.5 + 29.5 + 2.0 * 37.5) / 7.0;
        assert_abs_diff_eq!(table.grouped_mean(), expected, epsilon = 1e-12);
    }
}
