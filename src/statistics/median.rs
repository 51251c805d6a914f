use std::cmp::Ordering;

use num_traits::Float;

use super::Statistic;

/// Middle value of the sorted sample.
///
/// For an even count the two middle values are averaged. Empty → NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

/// Sorted copy of the data; NaNs, if any, compare equal to everything.
pub(crate) fn sorted<F: Float>(data: &[F]) -> Vec<F> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

impl<D, F> Statistic<D, F> for Median
where
    D: AsRef<[F]>,
    F: Float,
{
    fn compute(&self, data: &D) -> F {
        let sorted = sorted(data.as_ref());
        let n = sorted.len();
        if n == 0 {
            return F::nan();
        }

        let (lower, upper) = sorted.split_at(n / 2);
        match (lower.last(), upper.first()) {
            (Some(&a), Some(&b)) if n % 2 == 0 => (a + b) / (F::one() + F::one()),
            (_, Some(&b)) => b,
            _ => F::nan(),
        }
    }
}
