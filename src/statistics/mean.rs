use crate::math::Vector;
use super::Statistic;

/// Arithmetic mean with **Kahan summation**.
///
/// Compensated summation keeps hand-entered decimals such as `0.1` from
/// drifting when many of them are added. An empty sample yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Vector,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        // 0 / 0 for an empty slice
        sum / T::from_usize(slice.len())
    }
}
