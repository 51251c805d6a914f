//! Bordered text tables for the result types.

use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::frequency::FrequencyTable;
use crate::regression::{Direction, RegressionAnalysis};
use crate::summary::Summary;

fn styled() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn title(text: &str) -> Table {
    let mut table = styled();
    table.add_row(vec![Cell::new(text).set_alignment(CellAlignment::Center)]);
    table
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).set_alignment(CellAlignment::Center))
        .collect()
}

fn metric(name: &str, value: String) -> Vec<Cell> {
    vec![
        Cell::new(name).set_alignment(CellAlignment::Left),
        Cell::new(value).set_alignment(CellAlignment::Right),
    ]
}

impl Summary {
    /// Metric / value cards, `decimals` digits after the point.
    pub fn display_with(&self, decimals: usize) -> String {
        let cv = self
            .coefficient_of_variation
            .map_or_else(|| "undefined".to_string(), |cv| format!("{cv:.decimals$}%"));

        let mut table = styled();
        table
            .set_header(header(&["Metric", "Value"]))
            .add_row(metric("Count", self.count.to_string()))
            .add_row(metric("Mean", format!("{:.decimals$}", self.mean)))
            .add_row(metric("Median", format!("{:.decimals$}", self.median)))
            .add_row(metric("Mode", self.mode.to_string()))
            .add_row(metric("Range", format!("{:.decimals$}", self.range)))
            .add_row(metric("Variance", format!("{:.decimals$}", self.variance)))
            .add_row(metric(
                "Standard Deviation",
                format!("{:.decimals$}", self.standard_deviation),
            ))
            .add_row(metric("Coefficient of Variation", cv));

        format!("{}\n{}", title("Statistical Analysis"), table)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(4))
    }
}

impl FrequencyTable {
    /// The classic four-column table plus cumulative frequencies.
    pub fn display(&self) -> String {
        let mut table = styled();
        table.set_header(header(&[
            "Class Interval",
            "Class Boundaries",
            "Midpoint",
            "Frequency",
            "Cumulative",
        ]));
        for row in &self.rows {
            table.add_row(vec![
                Cell::new(&row.interval).set_alignment(CellAlignment::Left),
                Cell::new(&row.boundaries).set_alignment(CellAlignment::Left),
                Cell::new(format!("{:.2}", row.midpoint)).set_alignment(CellAlignment::Right),
                Cell::new(row.frequency).set_alignment(CellAlignment::Right),
                Cell::new(row.cumulative_frequency).set_alignment(CellAlignment::Right),
            ]);
        }
        format!("{}\n{}", title("Frequency Distribution Table"), table)
    }
}

impl Display for FrequencyTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl RegressionAnalysis {
    /// Correlation and regression cards followed by the residuals table.
    pub fn display_with(&self, decimals: usize, correlation_decimals: usize) -> String {
        let marker = match self.strength.direction {
            Direction::Positive => "🟢",
            Direction::Negative => "🔴",
            Direction::None => "⚪",
        };
        let r_reading = format!("{marker} {}", self.strength);

        let mut table = styled();
        table
            .set_header(header(&["Metric", "Value", "Interpretation"]))
            .add_row(vec![
                Cell::new("Correlation Coefficient (r)"),
                Cell::new(format!("{:.correlation_decimals$}", self.correlation))
                    .set_alignment(CellAlignment::Right),
                Cell::new(r_reading),
            ])
            .add_row(vec![
                Cell::new("R²"),
                Cell::new(format!("{:.decimals$}", self.r_squared))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!(
                    "{:.1}% of variance explained",
                    self.r_squared * 100.0
                )),
            ])
            .add_row(vec![
                Cell::new("Slope (b)"),
                Cell::new(format!("{:.decimals$}", self.fit.slope))
                    .set_alignment(CellAlignment::Right),
                Cell::new(self.fit.slope_interpretation(decimals)),
            ])
            .add_row(vec![
                Cell::new("Y-intercept (a)"),
                Cell::new(format!("{:.decimals$}", self.fit.intercept))
                    .set_alignment(CellAlignment::Right),
                Cell::new("Predicted Y at X = 0"),
            ])
            .add_row(vec![
                Cell::new("Regression Equation"),
                Cell::new(self.fit.equation(decimals)).set_alignment(CellAlignment::Right),
                Cell::new("Least-squares line"),
            ]);

        let mut residuals = styled();
        residuals.set_header(header(&["X", "Actual Y", "Predicted Y", "Residual"]));
        for r in &self.residuals {
            residuals.add_row(vec![
                Cell::new(r.x).set_alignment(CellAlignment::Right),
                Cell::new(r.actual).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", r.predicted)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:+.2}", r.residual)).set_alignment(CellAlignment::Right),
            ]);
        }

        format!(
            "{}\n{}\n{}\n{}",
            title("Correlation & Regression Analysis"),
            table,
            title("Residuals Analysis"),
            residuals
        )
    }
}

impl Display for RegressionAnalysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(4, 6))
    }
}
