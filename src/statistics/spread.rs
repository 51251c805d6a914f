use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic, Variance};

/// `max - min`. Empty → NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Range;

impl<D, F> Statistic<D, F> for Range
where
    D: AsRef<[F]>,
    F: Float,
{
    fn compute(&self, data: &D) -> F {
        let slice = data.as_ref();
        if slice.is_empty() {
            return F::nan();
        }
        let (min, max) = slice
            .iter()
            .fold((F::infinity(), F::neg_infinity()), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        max - min
    }
}

/// Square root of a raw-data [`Variance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDev {
    /// Variance whose square root is taken.
    pub variance: Variance,
}

impl StdDev {
    /// Square root of `Variance { ddof }`.
    pub fn new(ddof: usize) -> Self {
        Self {
            variance: Variance::new(ddof),
        }
    }
}

impl<D, F> Statistic<D, F> for StdDev
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> F {
        self.variance.compute(data).sqrt()
    }
}

/// Standard deviation as a percentage of the mean.
///
/// `None` when the mean is zero.
pub fn coefficient_of_variation<F: Float + FromPrimitive>(std_dev: F, mean: F) -> Option<F> {
    if mean.is_zero() {
        return None;
    }
    let hundred = F::from_u8(100)?;
    Some(std_dev / mean * hundred)
}

/// [`coefficient_of_variation`] over raw data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoefficientOfVariation {
    /// Standard deviation in the numerator.
    pub std_dev: StdDev,
}

impl<D, F> Statistic<D, Option<F>> for CoefficientOfVariation
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let (sd, mean) = (self.std_dev, Mean).compute(data);
        coefficient_of_variation(sd, mean)
    }
}
