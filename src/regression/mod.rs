//! Correlation and simple linear regression of paired data.

mod correlation;
mod least_squares;
mod plot;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::RegressionError;
use crate::sample::PairedSample;
use crate::statistics::Statistic;

pub use correlation::{CorrelationStrength, Direction, Pearson, Strength, correlation};
pub use least_squares::{LeastSquares, LinearFit};
pub use plot::{Point, ScatterPlot, regression_line};

/// Observed and fitted value at one x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Residual {
    /// Explanatory value.
    pub x: f64,
    /// Observed y.
    pub actual: f64,
    /// y on the fitted line.
    pub predicted: f64,
    /// `actual - predicted`.
    pub residual: f64,
}

/// Residuals of `fit` at every pair of `data`.
pub fn residuals(data: &PairedSample<f64>, fit: &LinearFit<f64>) -> Vec<Residual> {
    data.pairs()
        .map(|(&x, &actual)| {
            let predicted = fit.predict(x);
            Residual {
                x,
                actual,
                predicted,
                residual: actual - predicted,
            }
        })
        .collect()
}

/// Everything shown for a pair of lists: r, the fitted line, residuals and
/// the chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionAnalysis {
    /// The pairs the line was fitted to.
    pub data: PairedSample<f64>,
    /// Pearson's r.
    pub correlation: f64,
    /// Coefficient of determination, `r²`.
    pub r_squared: f64,
    /// Verbal reading of `correlation`.
    pub strength: CorrelationStrength,
    /// Least-squares line.
    pub fit: LinearFit<f64>,
    /// One entry per pair, in input order.
    pub residuals: Vec<Residual>,
    /// Sum of squared residuals.
    pub sse: f64,
    /// Chart series for a plotting front end.
    pub plot: ScatterPlot,
}

impl RegressionAnalysis {
    /// Fit `data` and derive every reading of the fit.
    pub fn compute(
        data: PairedSample<f64>,
        config: &AnalysisConfig,
    ) -> Result<Self, RegressionError> {
        let fit = LeastSquares.compute(&data)?;
        let r = Pearson.compute(&data);
        let strength =
            CorrelationStrength::classify(r, config.strong_threshold, config.moderate_threshold);
        let residuals = residuals(&data, &fit);
        let sse = residuals.iter().map(|res| res.residual * res.residual).sum();
        let plot = ScatterPlot::new(&data, &fit, config.line_points, config.line_margin);
        debug!("regression over {} pairs: r={r} {strength}", data.len());

        Ok(Self {
            data,
            correlation: r,
            r_squared: r * r,
            strength,
            fit,
            residuals,
            sse,
            plot,
        })
    }
}
