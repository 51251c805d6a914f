use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;
use vesna::{AnalysisConfig, PairedSample, Sample, VarianceMethod, parse_values};

use self::{describe::DescribeArg, regress::RegressArg, report::ReportArg};

mod describe;
mod regress;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Descriptive statistics and the frequency table of one list of numbers
    Describe(#[clap(flatten)] DescribeArg),
    /// Correlation and least-squares line of paired data
    Regress(#[clap(flatten)] RegressArg),
    /// Write statistics and/or regression results to a file
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Regress(arg) => regress::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}

/// Settings shared by every subcommand.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// JSON file with analysis settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Measurement step used for class limits (overrides the config file)
    #[arg(long)]
    class_unit: Option<f64>,
    /// Variance reported in the summary (overrides the config file)
    #[arg(long, value_enum)]
    variance: Option<VarianceMethod>,
    /// Digits after the decimal point (overrides the config file)
    #[arg(long)]
    decimals: Option<usize>,
}

impl ConfigArg {
    pub(crate) fn load(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(unit) = self.class_unit {
            config.class_unit = unit;
        }
        if let Some(variance) = self.variance {
            config.variance = variance;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        let config = config.validate()?;
        debug!("{config:?}");
        Ok(config)
    }
}

/// One list of numbers, typed in or read from a CSV column.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ValuesArg {
    /// Comma-separated values, e.g. "10, 15, 20"
    #[arg(long, conflicts_with = "file")]
    values: Option<String>,
    /// CSV file with a header row
    #[arg(long)]
    file: Option<PathBuf>,
    /// Column of --file to analyse
    #[arg(long, default_value = "value")]
    column: String,
}

impl ValuesArg {
    pub(crate) fn load(&self) -> anyhow::Result<Option<Sample<f64>>> {
        if let Some(values) = &self.values {
            return Ok(Some(parse_values(values)?));
        }
        let Some(path) = &self.file else {
            return Ok(None);
        };
        let sample = Sample::read_column(path, &self.column)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(sample))
    }
}

/// Paired X/Y data, typed in or read from two CSV columns.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PairsArg {
    /// Comma-separated X values
    #[arg(long, requires = "y", conflicts_with = "pairs_file")]
    x: Option<String>,
    /// Comma-separated Y values
    #[arg(long, requires = "x")]
    y: Option<String>,
    /// CSV file with a header row holding both columns
    #[arg(long)]
    pairs_file: Option<PathBuf>,
    /// Column of --pairs-file with the X values
    #[arg(long, default_value = "x")]
    x_column: String,
    /// Column of --pairs-file with the Y values
    #[arg(long, default_value = "y")]
    y_column: String,
}

impl PairsArg {
    pub(crate) fn load(&self) -> anyhow::Result<Option<PairedSample<f64>>> {
        if let (Some(x), Some(y)) = (&self.x, &self.y) {
            return Ok(Some(PairedSample::parse(x, y)?));
        }
        let Some(path) = &self.pairs_file else {
            return Ok(None);
        };
        let data = PairedSample::read_columns(path, &self.x_column, &self.y_column)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(data))
    }
}
