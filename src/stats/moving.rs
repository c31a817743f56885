//! Fixed-window simple moving averages.

use crate::error::SeriesError;

use super::require_len;

/// Window length of the moving average drawn on the index charts.
pub const MOVING_AVERAGE_WINDOW: usize = 3;

/// Simple moving average over every full window of `window` consecutive values.
///
/// Output index `i` is the mean of `series[i..i + window]`. Partial windows are
/// never emitted, so the result has `len - window + 1` values.
pub fn simple_moving_average(series: &[f64], window: usize) -> Result<Vec<f64>, SeriesError> {
    if window == 0 {
        return Err(SeriesError::InvalidWindow { window });
    }
    require_len(series, window, "simple_moving_average")?;
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(SeriesError::NonFinite {
            operation: "simple_moving_average",
            index,
        });
    }
    Ok(series
        .windows(window)
        .map(|values| values.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Three-day simple moving average.
pub fn moving_average(series: &[f64]) -> Result<Vec<f64>, SeriesError> {
    simple_moving_average(series, MOVING_AVERAGE_WINDOW)
}
