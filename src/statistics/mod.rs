//! Estimators that reduce a sample to a number.
//!
//! Every estimator is a small value implementing [`Statistic`]. Tuples of
//! estimators are estimators too, so several results come out of one call:
//! ```
//! use vesna::{Mean, Median, Range, Statistic};
//!
//! let data = vec![3.0, 1.0, 2.0, 10.0];
//! let (mean, median, range): (f64, f64, f64) = (Mean, Median, Range).compute(&data);
//! assert!((mean - 4.0).abs() < 1e-12);
//! assert!((median - 2.5).abs() < 1e-12);
//! assert!((range - 9.0).abs() < 1e-12);
//! ```

mod mean;
mod median;
mod mode;
mod spread;
mod variance;

pub use mean::Mean;
pub use median::Median;
pub use mode::{Mode, Modes};
pub use spread::{CoefficientOfVariation, Range, StdDev, coefficient_of_variation};
pub use variance::{GroupedVariance, Variance};

/// Something computable from data `D`, yielding `T`.
pub trait Statistic<D, T> {
    /// Evaluate the statistic on `data`.
    fn compute(&self, data: &D) -> T;
}

// ===== 2-tuple =====
impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        (self.0.compute(data), self.1.compute(data))
    }
}

// ===== 3-tuple =====
impl<D, T1, T2, T3, S1, S2, S3> Statistic<D, (T1, T2, T3)> for (S1, S2, S3)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
        )
    }
}

// ===== 4-tuple =====
impl<D, T1, T2, T3, T4, S1, S2, S3, S4> Statistic<D, (T1, T2, T3, T4)> for (S1, S2, S3, S4)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
    S4: Statistic<D, T4>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3, T4) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
            self.3.compute(data),
        )
    }
}
