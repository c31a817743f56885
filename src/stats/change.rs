//! Day-over-day percentage changes and threshold-crossing counts.

use crate::error::SeriesError;

use super::require_len;

/// Absolute percentage change between each pair of consecutive days.
///
/// Element `i` of the result is `|(S[i+1] - S[i]) / S[i]| * 100`, so the output
/// is one shorter than the input.
pub fn percent_changes(series: &[f64]) -> Result<Vec<f64>, SeriesError> {
    const OP: &str = "percent_changes";
    require_len(series, 2, OP)?;
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(SeriesError::NonFinite {
            operation: OP,
            index,
        });
    }

    let mut changes = Vec::with_capacity(series.len() - 1);
    for (index, pair) in series.windows(2).enumerate() {
        let (prev, curr) = (pair[0], pair[1]);
        if prev == 0.0 {
            return Err(SeriesError::ZeroDenominator {
                operation: OP,
                index,
            });
        }
        changes.push(((curr - prev) / prev).abs() * 100.0);
    }
    Ok(changes)
}

/// Number of days whose absolute change from the previous day strictly exceeds
/// `threshold` percent.
pub fn num_days_big_percent_chg(series: &[f64], threshold: f64) -> Result<usize, SeriesError> {
    check_threshold(threshold)?;
    let changes = percent_changes(series)?;
    Ok(count_above(&changes, threshold))
}

/// Counts for several thresholds at once, in the order given. Changes are
/// computed a single time.
pub fn count_over_thresholds(
    series: &[f64],
    thresholds: &[f64],
) -> Result<Vec<usize>, SeriesError> {
    for &threshold in thresholds {
        check_threshold(threshold)?;
    }
    let changes = percent_changes(series)?;
    Ok(thresholds
        .iter()
        .map(|&threshold| count_above(&changes, threshold))
        .collect())
}

fn count_above(changes: &[f64], threshold: f64) -> usize {
    changes.iter().filter(|&&change| change > threshold).count()
}

fn check_threshold(threshold: f64) -> Result<(), SeriesError> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(SeriesError::InvalidThreshold(threshold))
    }
}
