use num_traits::{Float, FromPrimitive};

use crate::frequency::FrequencyTable;
use crate::math::Vector;
use super::{Mean, Statistic};

/// Raw-data variance with a degrees-of-freedom adjustment.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Delta degrees of freedom: the divisor is `n - ddof`.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (unbiased, Bessel's correction), the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }

    /// Divide by `n`.
    pub fn population() -> Self {
        Variance { ddof: 0 }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive + Copy,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        if slice.is_empty() || slice.len() <= self.ddof {
            return T::nan();
        }

        let mean: T = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c2 = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c2;
            let t = sq_sum + y;
            c2 = (t - sq_sum) - y;
            sq_sum = t;
        }

        sq_sum / <T as Vector>::from_usize(slice.len() - self.ddof)
    }
}

/// Variance of grouped data.
///
/// Bins the sample with Sturges' rule and weights each squared deviation of a
/// class midpoint from the raw mean by the class frequency:
/// ```text
/// σ² = Σ fᵢ (mᵢ - x̄)² / Σ fᵢ
/// ```
/// This is what a textbook frequency-table exercise reports; it differs from
/// the raw variance by the grouping error.
#[derive(Debug, Clone, Copy)]
pub struct GroupedVariance {
    /// Measurement step passed to the frequency table.
    pub class_unit: f64,
}

impl GroupedVariance {
    /// Grouped variance with classes labelled in steps of `class_unit`.
    pub fn new(class_unit: f64) -> Self {
        Self { class_unit }
    }
}

impl Default for GroupedVariance {
    fn default() -> Self {
        Self { class_unit: 1.0 }
    }
}

impl<D> Statistic<D, f64> for GroupedVariance
where
    D: AsRef<[f64]>,
{
    fn compute(&self, data: &D) -> f64 {
        let slice = data.as_ref();
        match FrequencyTable::with_unit(slice, self.class_unit) {
            Some(table) => table.grouped_variance(Mean.compute(&slice)),
            None => f64::NAN,
        }
    }
}
