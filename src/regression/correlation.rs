use std::fmt::{self, Display, Formatter};

use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::math::Vector;
use crate::sample::PairedSample;
use crate::statistics::Statistic;

/// Raw power sums of paired data, shared by the correlation and the
/// least-squares fit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sums<F> {
    pub n: F,
    pub x: F,
    pub y: F,
    pub xy: F,
    pub xx: F,
    pub yy: F,
}

impl<F: Float + FromPrimitive> Sums<F> {
    pub fn new(x: &[F], y: &[F]) -> Self {
        let zero = F::zero();
        let init = Sums {
            n: <F as Vector>::from_usize(x.len().min(y.len())),
            x: zero,
            y: zero,
            xy: zero,
            xx: zero,
            yy: zero,
        };
        x.iter().zip(y).fold(init, |s, (&a, &b)| Sums {
            x: s.x + a,
            y: s.y + b,
            xy: s.xy + a * b,
            xx: s.xx + a * a,
            yy: s.yy + b * b,
            ..s
        })
    }

    /// `nΣxy - ΣxΣy`
    pub fn cross(&self) -> F {
        self.n * self.xy - self.x * self.y
    }

    /// `nΣx² - (Σx)²`
    pub fn spread_x(&self) -> F {
        self.n * self.xx - self.x * self.x
    }

    /// `nΣy² - (Σy)²`
    pub fn spread_y(&self) -> F {
        self.n * self.yy - self.y * self.y
    }
}

/// Pearson's product-moment correlation coefficient.
///
/// ```text
/// r = (nΣxy - ΣxΣy) / √((nΣx² - (Σx)²)(nΣy² - (Σy)²))
/// ```
/// Returns `0` when either variable is constant. Pairs beyond the shorter
/// slice are ignored.
pub fn correlation<F: Float + FromPrimitive>(x: &[F], y: &[F]) -> F {
    let s = Sums::new(x, y);
    let denominator = (s.spread_x() * s.spread_y()).sqrt();
    if denominator.is_zero() || denominator.is_nan() {
        return F::zero();
    }
    s.cross() / denominator
}

/// [`correlation`] as a statistic of a [`PairedSample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

impl<F: Float + FromPrimitive> Statistic<PairedSample<F>, F> for Pearson {
    fn compute(&self, data: &PairedSample<F>) -> F {
        correlation(data.x(), data.y())
    }
}

/// How tightly the points follow a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// `|r|` above the strong threshold.
    Strong,
    /// `|r|` above the moderate threshold.
    Moderate,
    /// Anything else.
    Weak,
}

/// Sign of the relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// y tends to grow with x.
    Positive,
    /// y tends to fall as x grows.
    Negative,
    /// `r = 0` exactly.
    None,
}

/// Verbal reading of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationStrength {
    /// Strong, moderate or weak by `|r|`.
    pub strength: Strength,
    /// Sign of `r`.
    pub direction: Direction,
}

impl CorrelationStrength {
    /// Classify `r`: strong above `strong`, moderate above `moderate`,
    /// weak otherwise (both thresholds compare against `|r|`).
    pub fn classify(r: f64, strong: f64, moderate: f64) -> Self {
        let strength = if r.abs() > strong {
            Strength::Strong
        } else if r.abs() > moderate {
            Strength::Moderate
        } else {
            Strength::Weak
        };
        let direction = if r > 0.0 {
            Direction::Positive
        } else if r < 0.0 {
            Direction::Negative
        } else {
            Direction::None
        };
        Self { strength, direction }
    }
}

impl Display for CorrelationStrength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let strength = match self.strength {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        };
        match self.direction {
            Direction::Positive => write!(f, "{strength} positive correlation"),
            Direction::Negative => write!(f, "{strength} negative correlation"),
            Direction::None => write!(f, "No linear correlation"),
        }
    }
}
