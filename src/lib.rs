//! Descriptive statistics, grouped frequency tables and simple linear
//! regression for small hand-entered data sets.
//!
//! ```
//! use vesna::{AnalysisConfig, PairedSample, RegressionAnalysis, Summary, parse_values};
//!
//! let config = AnalysisConfig::default();
//! let summary = Summary::compute(&parse_values("10, 15, 20, 25, 30, 35, 40")?, &config)?;
//! assert_eq!(summary.frequency_table.rows.len(), 4);
//!
//! let data = PairedSample::parse("1, 2, 3, 4, 5", "2, 4, 6, 8, 10")?;
//! let analysis = RegressionAnalysis::compute(data, &config)?;
//! assert_eq!(analysis.fit.equation(2), "y = 0.00 + 2.00x");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod math;

pub mod config;
mod display;
pub mod error;
pub mod frequency;
pub mod regression;
pub mod report;
mod sample;
mod statistics;
mod summary;

pub use math::*;
pub use crate::config::{AnalysisConfig, VarianceMethod};
pub use crate::error::{ConfigError, RegressionError, ReportError, SampleError};
pub use crate::frequency::{ClassRow, FrequencyTable};
pub use crate::regression::{LinearFit, RegressionAnalysis};
pub use crate::report::{Report, ReportFormat};
pub use crate::sample::{PairedSample, Sample, parse_values};
pub use crate::statistics::*;
pub use crate::summary::Summary;
