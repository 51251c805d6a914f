use std::path::PathBuf;

use anyhow::Context;
use vesna::{RegressionAnalysis, Report, ReportFormat, Summary};

use super::{ConfigArg, PairsArg, ValuesArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    values: ValuesArg,
    #[clap(flatten)]
    pairs: PairsArg,
    #[clap(flatten)]
    config: ConfigArg,
    /// Output format, guessed from --output when omitted
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ReportArg {
    /// Format and path to write, falling back to the extension of --output
    /// and then to CSV with the default file name.
    fn destination(&self) -> (ReportFormat, PathBuf) {
        let format = self
            .format
            .or_else(|| self.output.as_deref().and_then(ReportFormat::from_path))
            .unwrap_or(ReportFormat::Csv);
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
        (format, output)
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let config = arg.config.load()?;

    let mut report = Report::today();
    if let Some(sample) = arg.values.load()? {
        report = report.with_summary(Summary::compute(&sample, &config)?);
    }
    if let Some(data) = arg.pairs.load()? {
        report = report.with_regression(RegressionAnalysis::compute(data, &config)?);
    }

    let (format, output) = arg.destination();
    report
        .save(&output, format, &config)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{}", output.display());
    Ok(())
}
