use std::fmt::Display;

use log::debug;
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use super::correlation::Sums;
use crate::error::RegressionError;
use crate::sample::PairedSample;
use crate::statistics::Statistic;

/// Ordinary least-squares line `y = a + b·x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit<F> {
    /// `a`, the value of y at x = 0.
    pub intercept: F,
    /// `b`, change in y per unit of x.
    pub slope: F,
}

impl<F: Float + FromPrimitive> LinearFit<F> {
    /// Fit the line minimising the sum of squared vertical residuals.
    ///
    /// ```text
    /// b = (nΣxy - ΣxΣy) / (nΣx² - (Σx)²)
    /// a = ȳ - b·x̄
    /// ```
    /// Fails with [`RegressionError::ConstantX`] when every x is the same,
    /// since the slope is then undefined.
    pub fn fit(x: &[F], y: &[F]) -> Result<Self, RegressionError> {
        let first = x.first().copied().ok_or(crate::SampleError::NoValues)?;
        if x.iter().all(|&v| (v - first).is_zero()) {
            return Err(RegressionError::ConstantX);
        }

        let s = Sums::new(x, y);
        let denominator = s.spread_x();
        if denominator.is_zero() {
            return Err(RegressionError::ConstantX);
        }

        let slope = s.cross() / denominator;
        let intercept = s.y / s.n - slope * (s.x / s.n);
        Ok(Self { intercept, slope })
    }

    /// Point on the line at `x`.
    #[inline]
    pub fn predict(&self, x: F) -> F {
        self.intercept + self.slope * x
    }
}

impl<F: Float + Display> LinearFit<F> {
    /// `"y = a + bx"` with `decimals` digits after the point.
    pub fn equation(&self, decimals: usize) -> String {
        format!(
            "y = {:.*} + {:.*}x",
            decimals, self.intercept, decimals, self.slope
        )
    }

    /// One-sentence reading of the slope.
    pub fn slope_interpretation(&self, decimals: usize) -> String {
        let verb = if self.slope > F::zero() {
            "increases"
        } else {
            "decreases"
        };
        format!(
            "For every 1 unit increase in X, Y {verb} by {:.*} units",
            decimals,
            self.slope.abs()
        )
    }
}

/// Least-squares fit as a statistic of a [`PairedSample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl<F> Statistic<PairedSample<F>, Result<LinearFit<F>, RegressionError>> for LeastSquares
where
    F: Float + FromPrimitive + Display,
{
    fn compute(&self, data: &PairedSample<F>) -> Result<LinearFit<F>, RegressionError> {
        let fit = LinearFit::fit(data.x(), data.y())?;
        debug!("least squares: {}", fit.equation(6));
        Ok(fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn exact_line_is_recovered() {
        let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 0.0, epsilon = 1e-12);
        assert_eq!(fit.equation(4), "y = 0.0000 + 2.0000x");
    }

    #[test]
    fn noisy_data() {
        // x̄ = 3, ȳ = 4, b = 30 / 50 = 0.6, a = 4 - 1.8 = 2.2
        let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.slope, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 2.2, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.predict(10.0), 8.2, epsilon = 1e-12);
    }

    #[test]
    fn constant_x_is_rejected() {
        let err = LinearFit::fit(&[2.0_f64, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, RegressionError::ConstantX));
        let err = LinearFit::fit(&[0.1_f64], &[1.0]).unwrap_err();
        assert!(matches!(err, RegressionError::ConstantX));
    }

    #[test]
    fn empty_is_rejected() {
        let err = LinearFit::<f64>::fit(&[], &[]).unwrap_err();
        assert!(matches!(err, RegressionError::Sample(crate::SampleError::NoValues)));
    }

    #[test]
    fn slope_wording() {
        let up = LinearFit { intercept: 1.0_f64, slope: 0.25 };
        assert_eq!(
            up.slope_interpretation(4),
            "For every 1 unit increase in X, Y increases by 0.2500 units"
        );
        let down = LinearFit { intercept: 1.0_f64, slope: -1.5 };
        assert_eq!(
            down.slope_interpretation(2),
            "For every 1 unit increase in X, Y decreases by 1.50 units"
        );
    }

    #[test]
    fn statistic_over_paired_sample() {
        let paired = PairedSample::parse("0, 1, 2", "1, 3, 5").unwrap();
        let fit = LeastSquares.compute(&paired).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    }
}
