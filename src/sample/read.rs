use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::Sample;
use crate::error::SampleError;

/// Position of the header named `column`.
pub(super) fn column_index(
    headers: &StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, SampleError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SampleError::MissingColumn {
            column: column.to_owned(),
            path: path.to_path_buf(),
        })
}

/// Parse one cell, treating unparsable and non-finite values as missing.
pub(super) fn parse_cell(record: &StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .and_then(|cell| cell.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub(super) fn open<P: AsRef<Path>>(path: P) -> Result<csv::Reader<std::fs::File>, SampleError> {
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?)
}

impl Sample<f64> {
    /// Read one numeric column from a CSV file with a header row.
    ///
    /// Cells that do not parse as finite numbers are skipped.
    pub fn read_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let mut rdr = open(path)?;
        let idx = column_index(rdr.headers()?, column, path)?;

        let mut data = Vec::new();
        let mut skipped = 0_usize;
        for result in rdr.records() {
            match parse_cell(&result?, idx) {
                Some(v) => data.push(v),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("skipped {skipped} non-numeric cells in column `{column}`");
        }
        if data.is_empty() {
            return Err(SampleError::EmptyFile);
        }
        debug!("read {} values from {}", data.len(), path.display());
        Ok(Self { data })
    }
}
