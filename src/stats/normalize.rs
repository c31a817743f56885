//! Expressing a series as a percentage of its own mean.

use crate::error::SeriesError;

use super::require_len;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.iter().sum::<f64>() / series.len() as f64)
}

/// Scale every value to a percentage of the series mean, so that a value equal
/// to the mean maps to `100.0`.
pub fn percent_of_mean(series: &[f64]) -> Result<Vec<f64>, SeriesError> {
    require_len(series, 1, "percent_of_mean")?;
    let baseline = mean(series).unwrap_or(f64::NAN);
    if baseline == 0.0 || !baseline.is_finite() {
        return Err(SeriesError::DegenerateMean { mean: baseline });
    }
    Ok(series.iter().map(|value| value / baseline * 100.0).collect())
}
