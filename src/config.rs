//! Settings shared by the analyses and the report renderers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which variance the summary reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VarianceMethod {
    /// Weighted by class midpoints of the Sturges frequency table.
    #[default]
    Grouped,
    /// Raw data, divided by `n`.
    Population,
    /// Raw data, divided by `n - 1`.
    Sample,
}

/// Knobs shared by the summary, the regression and the report renderers.
///
/// Every field has a default, so a config file only needs the keys it changes:
/// ```json
/// { "class_unit": 0.1, "variance": "sample" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Decimals for general metrics.
    pub decimals: usize,
    /// Decimals for the correlation coefficient.
    pub correlation_decimals: usize,
    /// Smallest measurement step used to label class intervals.
    pub class_unit: f64,
    /// Variance reported by the summary.
    pub variance: VarianceMethod,
    /// Number of segments the plotted regression line is split into.
    pub line_points: usize,
    /// Fraction of the x range the regression line extends past the data.
    pub line_margin: f64,
    /// `|r|` above this reads as a strong correlation.
    pub strong_threshold: f64,
    /// `|r|` above this reads as a moderate correlation.
    pub moderate_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            decimals: 4,
            correlation_decimals: 6,
            class_unit: 1.0,
            variance: VarianceMethod::Grouped,
            line_points: 100,
            line_margin: 0.1,
            strong_threshold: 0.8,
            moderate_threshold: 0.5,
        }
    }
}

impl AnalysisConfig {
    /// Load a JSON config file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged on success.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.class_unit.is_finite() && self.class_unit > 0.0) {
            return Err(ConfigError::Invalid {
                field: "class_unit",
                reason: "must be a positive finite number",
            });
        }
        if self.line_points == 0 {
            return Err(ConfigError::Invalid {
                field: "line_points",
                reason: "must be > 0",
            });
        }
        if !(self.line_margin.is_finite() && self.line_margin >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "line_margin",
                reason: "must be a non-negative finite number",
            });
        }
        if !(0.0..=1.0).contains(&self.moderate_threshold)
            || !(0.0..=1.0).contains(&self.strong_threshold)
            || self.moderate_threshold > self.strong_threshold
        {
            return Err(ConfigError::Invalid {
                field: "strong_threshold",
                reason: "thresholds must satisfy 0 <= moderate <= strong <= 1",
            });
        }
        Ok(self)
    }
}
