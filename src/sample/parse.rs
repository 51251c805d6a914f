use log::debug;

use super::Sample;
use crate::error::SampleError;

/// Longest prefix of `token` that reads as a number, so `"12kg"` is `12`.
fn leading_number(token: &str) -> Option<f64> {
    token
        .char_indices()
        .map(|(i, _)| i)
        .filter(|&i| i > 0)
        .chain(std::iter::once(token.len()))
        .rev()
        .find_map(|end| token.get(..end)?.parse::<f64>().ok())
}

/// Parse a comma-separated list of numbers as typed by a user.
///
/// Line breaks count as separators too, so pasted columns work. A token
/// counts by its numeric prefix (`"12kg"` reads as `12`); tokens without one,
/// and non-finite values, are dropped. Only an input with no numbers at all
/// is an error.
///
/// ```
/// let sample = vesna::parse_values("10, 15, abc, 20\n25kg").unwrap();
/// assert_eq!(sample.data, vec![10.0, 15.0, 20.0, 25.0]);
/// ```
pub fn parse_values(input: &str) -> Result<Sample<f64>, SampleError> {
    let sample: Sample<f64> = input
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match leading_number(token) {
            Some(value) if value.is_finite() => Some(value),
            _ => {
                debug!("skipping non-numeric token {token:?}");
                None
            }
        })
        .collect();

    if sample.is_empty() {
        return Err(SampleError::NoValues);
    }
    Ok(sample)
}
