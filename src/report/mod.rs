//! The exported document: statistics and/or regression results stamped with
//! a date, written as CSV, JSON or plain text.

mod csv;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::ReportError;
use crate::regression::RegressionAnalysis;
use crate::summary::Summary;

/// Heading of every report.
pub const REPORT_TITLE: &str = "Statistics & Regression Analysis Report";

/// File stem used when no output path is given.
pub const DEFAULT_FILE_STEM: &str = "statistics-regression-report";

/// Output encodings of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Sectioned comma-separated tables.
    Csv,
    /// The whole [`Report`] serialised with serde.
    Json,
    /// Bordered tables as printed on the terminal.
    Text,
}

impl ReportFormat {
    /// Guess from a file extension, `None` if unknown.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// `statistics-regression-report.<ext>`
    pub fn default_file_name(self) -> String {
        format!("{DEFAULT_FILE_STEM}.{}", self.extension())
    }
}

/// Results collected for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Heading, [`REPORT_TITLE`] unless changed.
    pub title: String,
    /// Date printed under the title.
    pub generated_on: NaiveDate,
    /// Descriptive statistics section.
    pub summary: Option<Summary>,
    /// Correlation and regression section.
    pub regression: Option<RegressionAnalysis>,
}

impl Report {
    /// Empty report dated `generated_on`.
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            generated_on,
            summary: None,
            regression: None,
        }
    }

    /// Report dated today in local time.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Add the statistics section.
    #[must_use]
    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Add the regression section.
    #[must_use]
    pub fn with_regression(mut self, regression: RegressionAnalysis) -> Self {
        self.regression = Some(regression);
        self
    }

    /// True when neither section is present.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.regression.is_none()
    }

    fn date_line(&self) -> String {
        format!("Generated on: {}", self.generated_on.format("%Y-%m-%d"))
    }

    /// Plain-text document with bordered tables.
    pub fn render_text(&self, config: &AnalysisConfig) -> String {
        let mut sections = vec![self.title.clone(), self.date_line()];
        if let Some(summary) = &self.summary {
            sections.push(summary.display_with(config.decimals));
            if !summary.frequency_table.rows.is_empty() {
                sections.push(summary.frequency_table.display());
            }
        }
        if let Some(regression) = &self.regression {
            sections.push(regression.display_with(config.decimals, config.correlation_decimals));
        }
        sections.join("\n\n")
    }

    /// Encode the report as `format` into `out`.
    pub fn write<W: Write>(
        &self,
        mut out: W,
        format: ReportFormat,
        config: &AnalysisConfig,
    ) -> Result<(), ReportError> {
        if self.is_empty() {
            return Err(ReportError::Empty);
        }
        match format {
            ReportFormat::Csv => self.write_csv(&mut out, config)?,
            ReportFormat::Json => serde_json::to_writer_pretty(&mut out, self)?,
            ReportFormat::Text => writeln!(out, "{}", self.render_text(config))?,
        }
        out.flush()?;
        Ok(())
    }

    /// Write the report to `path`.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
        format: ReportFormat,
        config: &AnalysisConfig,
    ) -> Result<(), ReportError> {
        let path = path.as_ref();
        // checked before `File::create` truncates an existing file
        if self.is_empty() {
            return Err(ReportError::Empty);
        }
        self.write(BufWriter::new(File::create(path)?), format, config)?;
        info!("wrote {format:?} report to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PairedSample, parse_values};

    pub(super) fn sample_report() -> Report {
        let config = AnalysisConfig::default();
        let summary =
            Summary::compute(&parse_values("10, 15, 20, 20, 30").unwrap(), &config).unwrap();
        let regression = RegressionAnalysis::compute(
            PairedSample::parse("1, 2, 3", "2, 4, 7").unwrap(),
            &config,
        )
        .unwrap();
        Report::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .with_summary(summary)
            .with_regression(regression)
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("a/b.CSV")), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::from_path(Path::new("r.json")), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_path(Path::new("r.txt")), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_path(Path::new("r.pdf")), None);
        assert_eq!(ReportFormat::from_path(Path::new("report")), None);
        assert_eq!(
            ReportFormat::Csv.default_file_name(),
            "statistics-regression-report.csv"
        );
    }

    #[test]
    fn empty_report_is_refused() {
        let report = Report::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let err = report
            .write(Vec::new(), ReportFormat::Text, &AnalysisConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::Empty));
    }

    #[test]
    fn saving_empty_report_keeps_existing_file() {
        let path = std::env::temp_dir().join("vesna-report-existing.csv");
        std::fs::write(&path, "previous contents").unwrap();
        let report = Report::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let err = report
            .save(&path, ReportFormat::Csv, &AnalysisConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::Empty));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous contents");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn text_report_contains_every_section() {
        let text = sample_report().render_text(&AnalysisConfig::default());
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Generated on: 2024-03-09"));
        assert!(text.contains("Statistical Analysis"));
        assert!(text.contains("Frequency Distribution Table"));
        assert!(text.contains("Correlation & Regression Analysis"));
    }

    #[test]
    fn json_report_parses_back() {
        let mut buf = Vec::new();
        sample_report()
            .write(&mut buf, ReportFormat::Json, &AnalysisConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["generated_on"], "2024-03-09");
        assert_eq!(value["summary"]["count"], 5);
        assert_eq!(value["summary"]["mode"]["values"][0], 20.0);
        assert_eq!(value["regression"]["plot"]["line"].as_array().unwrap().len(), 101);
    }

    #[test]
    fn save_writes_file() {
        let path = std::env::temp_dir().join("vesna-report-test.txt");
        sample_report()
            .save(&path, ReportFormat::Text, &AnalysisConfig::default())
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Residuals Analysis"));
        std::fs::remove_file(path).unwrap();
    }
}
