use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::read::{column_index, open, parse_cell};
use super::{Sample, parse_values};
use crate::error::SampleError;

/// Two observations per subject, `x[i]` paired with `y[i]`.
///
/// Both sides are non-empty and equally long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedSample<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T> PairedSample<T> {
    /// Pair up two lists of equal, non-zero length.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, SampleError> {
        if x.is_empty() || y.is_empty() {
            return Err(SampleError::NoValues);
        }
        if x.len() != y.len() {
            return Err(SampleError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Explanatory values.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Response values.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.x.iter().zip(&self.y)
    }
}

impl<T> TryFrom<(Sample<T>, Sample<T>)> for PairedSample<T> {
    type Error = SampleError;

    fn try_from((x, y): (Sample<T>, Sample<T>)) -> Result<Self, Self::Error> {
        Self::new(x.data, y.data)
    }
}

impl PairedSample<f64> {
    /// Parse two comma-separated lists, as entered in separate X and Y fields.
    ///
    /// Each list is parsed independently, so a bad token shortens only its
    /// own side and usually ends in a length mismatch.
    pub fn parse(x_input: &str, y_input: &str) -> Result<Self, SampleError> {
        let x = parse_values(x_input)?;
        let y = parse_values(y_input)?;
        (x, y).try_into()
    }

    /// Read two numeric columns from a CSV file with a header row.
    ///
    /// A row is kept only if both cells parse.
    pub fn read_columns<P: AsRef<Path>>(
        path: P,
        x_column: &str,
        y_column: &str,
    ) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let mut rdr = open(path)?;
        let headers = rdr.headers()?.clone();
        let xi = column_index(&headers, x_column, path)?;
        let yi = column_index(&headers, y_column, path)?;

        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut skipped = 0_usize;
        for result in rdr.records() {
            let record = result?;
            match (parse_cell(&record, xi), parse_cell(&record, yi)) {
                (Some(a), Some(b)) => {
                    x.push(a);
                    y.push(b);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("skipped {skipped} incomplete rows in {}", path.display());
        }
        if x.is_empty() {
            return Err(SampleError::EmptyFile);
        }
        debug!("read {} pairs from {}", x.len(), path.display());
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_equal_lengths() {
        let paired = PairedSample::parse("1, 2, 3", "2, 4, 6").unwrap();
        assert_eq!(paired.len(), 3);
        assert_eq!(paired.pairs().last(), Some((&3.0, &6.0)));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = PairedSample::parse("1, 2, 3", "2, 4").unwrap_err();
        assert!(matches!(err, SampleError::LengthMismatch { x: 3, y: 2 }));
    }

    #[test]
    fn empty_side_is_reported() {
        assert!(matches!(
            PairedSample::<f64>::new(vec![], vec![1.0]),
            Err(SampleError::NoValues)
        ));
        assert!(matches!(
            PairedSample::parse("", "1"),
            Err(SampleError::NoValues)
        ));
    }

    #[test]
    fn reads_complete_rows_only() {
        let path = std::env::temp_dir().join("vesna-paired.csv");
        std::fs::write(&path, "x,y\n1,2\n2,\n3,6\n").unwrap();
        let paired = PairedSample::read_columns(&path, "x", "y").unwrap();
        assert_eq!(paired.x(), &[1.0, 3.0]);
        assert_eq!(paired.y(), &[2.0, 6.0]);
        std::fs::remove_file(path).unwrap();
    }
}
