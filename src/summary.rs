use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, VarianceMethod};
use crate::error::SampleError;
use crate::frequency::FrequencyTable;
use crate::sample::Sample;
use crate::statistics::{
    Mean, Median, Mode, Modes, Range, Statistic, Variance, coefficient_of_variation,
};

/// Descriptive statistics of one list of numbers, as shown on the result
/// cards, plus the frequency table behind the grouped variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value of the sorted data.
    pub median: f64,
    /// Most frequent value(s), or no mode.
    pub mode: Modes<f64>,
    /// `max - min`.
    pub range: f64,
    /// How `variance` was computed.
    pub variance_method: VarianceMethod,
    /// Grouped, population or sample variance per `variance_method`.
    pub variance: f64,
    /// Square root of `variance`.
    pub standard_deviation: f64,
    /// Percent; `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// Sturges table behind the grouped variance.
    pub frequency_table: FrequencyTable,
}

impl Summary {
    /// Compute every statistic for `sample`.
    pub fn compute(sample: &Sample<f64>, config: &AnalysisConfig) -> Result<Self, SampleError> {
        let table =
            FrequencyTable::with_unit(sample.as_ref(), config.class_unit).ok_or(SampleError::NoValues)?;

        let (mean, median, mode, range): (f64, f64, Modes<f64>, f64) =
            (Mean, Median, Mode, Range).compute(sample);

        let variance = match config.variance {
            VarianceMethod::Grouped => table.grouped_variance(mean),
            VarianceMethod::Population => Variance::population().compute(sample),
            VarianceMethod::Sample => Variance::default().compute(sample),
        };
        let standard_deviation = variance.sqrt();

        let min = sample.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        debug!(
            "summary of {} values: mean={mean} variance={variance} ({:?})",
            sample.len(),
            config.variance
        );

        Ok(Self {
            count: sample.len(),
            min,
            max,
            mean,
            median,
            mode,
            range,
            variance_method: config.variance,
            variance,
            standard_deviation,
            coefficient_of_variation: coefficient_of_variation(standard_deviation, mean),
            frequency_table: table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_values;
    use approx::assert_abs_diff_eq;

    #[test]
    fn classroom_example() {
        let sample = parse_values("10, 15, 20, 25, 30, 35, 40").unwrap();
        let summary = Summary::compute(&sample, &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.count, 7);
        assert_abs_diff_eq!(summary.mean, 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.median, 25.0);
        assert_eq!(summary.mode, Modes::NoMode);
        assert_abs_diff_eq!(summary.range, 30.0);

        // grouped: (2·11.5² + 2·3.5² + 4.5² + 2·12.5²) / 7
        let expected = 621.75 / 7.0;
        assert_abs_diff_eq!(summary.variance, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.standard_deviation, expected.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            summary.coefficient_of_variation.unwrap(),
            expected.sqrt() / 25.0 * 100.0,
            epsilon = 1e-9
        );
        assert_eq!(summary.frequency_table.rows.len(), 4);
    }

    #[test]
    fn raw_variance_methods() {
        let sample = Sample::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let population = AnalysisConfig {
            variance: VarianceMethod::Population,
            ..AnalysisConfig::default()
        };
        let summary = Summary::compute(&sample, &population).unwrap();
        assert_abs_diff_eq!(summary.variance, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.standard_deviation, 2.0, epsilon = 1e-12);
        assert_eq!(summary.mode.values(), &[4.0]);

        let unbiased = AnalysisConfig {
            variance: VarianceMethod::Sample,
            ..AnalysisConfig::default()
        };
        let summary = Summary::compute(&sample, &unbiased).unwrap();
        assert_abs_diff_eq!(summary.variance, 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn single_value() {
        let summary = Summary::compute(&Sample::new(vec![7.0]), &AnalysisConfig::default()).unwrap();
        assert_abs_diff_eq!(summary.mean, 7.0);
        assert_abs_diff_eq!(summary.variance, 0.0);
        assert_abs_diff_eq!(summary.coefficient_of_variation.unwrap(), 0.0);
        assert_eq!(summary.frequency_table.rows.len(), 1);
    }

    #[test]
    fn zero_mean_has_no_cv() {
        let sample = Sample::new(vec![-3.0, 0.0, 3.0]);
        let summary = Summary::compute(&sample, &AnalysisConfig::default()).unwrap();
        assert!(summary.coefficient_of_variation.is_none());
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = Summary::compute(&Sample::new(vec![]), &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, SampleError::NoValues));
    }
}
