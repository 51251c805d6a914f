mod paired;
mod parse;
mod read;

use serde::{Deserialize, Serialize};

use crate::statistics::Statistic;

pub use paired::PairedSample;
pub use parse::parse_values;

/// An ordered list of observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample<T> {
    /// Observations in input order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Estimate a statistic from the sample data
    pub fn estimate<O>(&self, statistic: impl Statistic<Self, O>) -> O {
        statistic.compute(self)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mean;
    use approx::assert_abs_diff_eq;

    #[test]
    fn estimate_delegates_to_statistic() {
        let sample: Sample<f64> = [2.0, 4.0, 6.0].into_iter().collect();
        assert_eq!(sample.len(), 3);
        assert_abs_diff_eq!(sample.estimate(Mean), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn serializes_as_plain_array() {
        let sample = Sample::new(vec![1.5, 2.0]);
        assert_eq!(serde_json::to_string(&sample).unwrap(), "[1.5,2.0]");
    }
}
