use serde::{Deserialize, Serialize};

use super::LinearFit;
use crate::sample::PairedSample;

/// A point of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Series of a scatter chart with its fitted line.
///
/// Rendering is left to the consumer; this is the data a plotting front end
/// needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlot {
    /// Observed pairs.
    pub points: Vec<Point>,
    /// Fitted value at each observed x.
    pub predicted: Vec<Point>,
    /// The regression line sampled densely enough to draw smoothly.
    pub line: Vec<Point>,
}

impl ScatterPlot {
    /// Build all three series.
    ///
    /// The line spans the x range widened by `margin` (a fraction of the
    /// range) on each side, cut into `segments` equal steps.
    pub fn new(
        data: &PairedSample<f64>,
        fit: &LinearFit<f64>,
        segments: usize,
        margin: f64,
    ) -> Self {
        let points = data.pairs().map(|(&x, &y)| Point { x, y }).collect();
        let predicted = data
            .x()
            .iter()
            .map(|&x| Point {
                x,
                y: fit.predict(x),
            })
            .collect();

        Self {
            points,
            predicted,
            line: regression_line(data.x(), fit, segments, margin),
        }
    }
}

/// `segments + 1` evenly spaced points on the fitted line.
///
/// Empty if `xs` is empty or `segments` is zero.
pub fn regression_line(
    xs: &[f64],
    fit: &LinearFit<f64>,
    segments: usize,
    margin: f64,
) -> Vec<Point> {
    let Some(min) = xs.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = xs.iter().copied().fold(min, f64::max);
    if segments == 0 {
        return Vec::new();
    }

    let range = max - min;
    let start = min - range * margin;
    let end = max + range * margin;
    let step = (end - start) / segments as f64;

    (0..=segments)
        .map(|i| {
            // last point pinned to `end` so rounding never shortens the line
            let x = if i == segments {
                end
            } else {
                start + step * i as f64
            };
            Point {
                x,
                y: fit.predict(x),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fit() -> LinearFit<f64> {
        LinearFit {
            intercept: 1.0,
            slope: 2.0,
        }
    }

    #[test]
    fn line_extends_past_data() {
        let line = regression_line(&[0.0, 10.0], &fit(), 100, 0.1);
        assert_eq!(line.len(), 101);
        let first = line.first().unwrap();
        let last = line.last().unwrap();
        assert_abs_diff_eq!(first.x, -1.0);
        assert_abs_diff_eq!(last.x, 11.0);
        assert_abs_diff_eq!(last.y, 23.0);
    }

    #[test]
    fn line_points_lie_on_fit() {
        for p in regression_line(&[2.0, 5.0, 3.0], &fit(), 10, 0.0) {
            assert_abs_diff_eq!(p.y, 1.0 + 2.0 * p.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_inputs_give_empty_line() {
        assert!(regression_line(&[], &fit(), 100, 0.1).is_empty());
        assert!(regression_line(&[1.0, 2.0], &fit(), 0, 0.1).is_empty());
    }

    #[test]
    fn scatter_series_align_with_data() {
        let data = PairedSample::new(vec![1.0, 2.0], vec![3.5, 4.5]).unwrap();
        let plot = ScatterPlot::new(&data, &fit(), 4, 0.1);
        assert_eq!(plot.points.len(), 2);
        assert_eq!(plot.predicted.len(), 2);
        assert_eq!(plot.line.len(), 5);
        assert_abs_diff_eq!(plot.predicted.last().unwrap().y, 5.0);
    }
}
