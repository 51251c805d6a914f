use std::io::Write;

use csv::{Writer, WriterBuilder};

use super::Report;
use crate::config::AnalysisConfig;
use crate::error::ReportError;
use crate::regression::RegressionAnalysis;
use crate::summary::Summary;

fn writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new().flexible(true).from_writer(out)
}

fn metric<W: Write>(w: &mut Writer<W>, name: &str, value: &str) -> csv::Result<()> {
    w.write_record([name, value])
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    decimals: usize,
) -> Result<(), ReportError> {
    writeln!(out, "Statistical Analysis")?;
    {
        let mut w = writer(&mut *out);
        let cv = summary
            .coefficient_of_variation
            .map_or_else(|| "undefined".to_string(), |cv| format!("{cv:.decimals$}%"));
        w.write_record(["Metric", "Value"])?;
        metric(&mut w, "Mean", &format!("{:.decimals$}", summary.mean))?;
        metric(&mut w, "Median", &format!("{:.decimals$}", summary.median))?;
        metric(&mut w, "Mode", &summary.mode.to_string())?;
        metric(&mut w, "Range", &format!("{:.decimals$}", summary.range))?;
        metric(&mut w, "Variance", &format!("{:.decimals$}", summary.variance))?;
        metric(
            &mut w,
            "Standard Deviation",
            &format!("{:.decimals$}", summary.standard_deviation),
        )?;
        metric(&mut w, "Coefficient of Variation", &cv)?;
        w.flush()?;
    }
    writeln!(out)?;

    let rows = &summary.frequency_table.rows;
    if !rows.is_empty() {
        writeln!(out, "Frequency Distribution Table")?;
        {
            let mut w = writer(&mut *out);
            w.write_record(["Class Interval", "Class Boundaries", "Midpoint", "Frequency"])?;
            for row in rows {
                w.write_record([
                    row.interval.clone(),
                    row.boundaries.clone(),
                    format!("{:.2}", row.midpoint),
                    row.frequency.to_string(),
                ])?;
            }
            w.flush()?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_regression<W: Write>(
    out: &mut W,
    regression: &RegressionAnalysis,
    decimals: usize,
    correlation_decimals: usize,
) -> Result<(), ReportError> {
    writeln!(out, "Correlation & Regression Analysis")?;
    {
        let mut w = writer(&mut *out);
        w.write_record(["Metric", "Value"])?;
        metric(
            &mut w,
            "Correlation Coefficient (r)",
            &format!("{:.correlation_decimals$}", regression.correlation),
        )?;
        metric(
            &mut w,
            "Y-intercept (a)",
            &format!("{:.decimals$}", regression.fit.intercept),
        )?;
        metric(&mut w, "Slope (b)", &format!("{:.decimals$}", regression.fit.slope))?;
        metric(&mut w, "Regression Equation", &regression.fit.equation(decimals))?;
        w.flush()?;
    }
    writeln!(out)?;

    writeln!(out, "Data Points")?;
    {
        let mut w = writer(&mut *out);
        w.write_record(["X", "Y"])?;
        for (x, y) in regression.data.pairs() {
            w.write_record([x.to_string(), y.to_string()])?;
        }
        w.flush()?;
    }
    Ok(())
}

impl Report {
    /// Sectioned CSV: each block is a small table introduced by a title line
    /// and followed by a blank line.
    pub fn write_csv<W: Write>(
        &self,
        out: &mut W,
        config: &AnalysisConfig,
    ) -> Result<(), ReportError> {
        writeln!(out, "{}", self.title)?;
        writeln!(out)?;
        writeln!(out, "{}", self.date_line())?;
        writeln!(out)?;

        if let Some(summary) = &self.summary {
            write_summary(out, summary, config.decimals)?;
        }
        if let Some(regression) = &self.regression {
            write_regression(out, regression, config.decimals, config.correlation_decimals)?;
        }
        Ok(())
    }
}
