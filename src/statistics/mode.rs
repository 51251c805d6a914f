use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::Statistic;
use super::median::sorted;

/// Most frequent value(s) of a sample.
///
/// Ties are all reported, in ascending order. A sample where every value
/// occurs exactly once has no mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode;

/// Outcome of [`Mode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modes<F> {
    /// Every value is distinct (or the sample is empty).
    NoMode,
    /// Values sharing the highest frequency.
    Values(Vec<F>),
}

impl<F> Modes<F> {
    /// The modal values, empty when there is no mode.
    pub fn values(&self) -> &[F] {
        match self {
            Modes::NoMode => &[],
            Modes::Values(v) => v,
        }
    }
}

impl<F: Display> Display for Modes<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Modes::NoMode => write!(f, "No mode"),
            Modes::Values(values) => write!(f, "{}", values.iter().join(", ")),
        }
    }
}

impl<D, F> Statistic<D, Modes<F>> for Mode
where
    D: AsRef<[F]>,
    F: Float,
{
    fn compute(&self, data: &D) -> Modes<F> {
        // `x + 0` folds -0.0 into 0.0 so both count as one value
        let normalized: Vec<F> = data.as_ref().iter().map(|&x| x + F::zero()).collect();
        let counts: Vec<(usize, F)> = sorted(&normalized).into_iter().dedup_with_count().collect();

        let max_count = counts.iter().map(|&(count, _)| count).max().unwrap_or(0);
        if max_count <= 1 {
            return Modes::NoMode;
        }

        Modes::Values(
            counts
                .into_iter()
                .filter(|&(count, _)| count == max_count)
                .map(|(_, value)| value)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode() {
        let modes = Mode.compute(&[3.0_f64, 1.0, 3.0, 2.0]);
        assert_eq!(modes, Modes::Values(vec![3.0]));
    }

    #[test]
    fn ties_are_sorted_ascending() {
        let modes = Mode.compute(&[9.0_f64, 2.0, 9.0, 5.0, 2.0, 7.0]);
        assert_eq!(modes.values(), &[2.0, 9.0]);
        assert_eq!(modes.to_string(), "2, 9");
    }

    #[test]
    fn all_distinct_has_no_mode() {
        let modes = Mode.compute(&[10.0_f64, 15.0, 20.0]);
        assert_eq!(modes, Modes::NoMode);
        assert_eq!(modes.to_string(), "No mode");
    }

    #[test]
    fn all_values_tied_above_one_are_all_modes() {
        let modes = Mode.compute(&[1.0_f64, 1.0, 2.0, 2.0]);
        assert_eq!(modes.values(), &[1.0, 2.0]);
    }

    #[test]
    fn signed_zeros_are_one_value() {
        let modes = Mode.compute(&[-0.0_f64, 0.0, 4.0]);
        assert_eq!(modes.to_string(), "0");
    }

    #[test]
    fn empty_has_no_mode() {
        assert_eq!(Mode.compute(&Vec::<f64>::new()), Modes::NoMode);
    }
}
