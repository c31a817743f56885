//! Numeric transforms over daily index series.
//!
//! Every function here is pure: inputs are borrowed slices, outputs are fresh
//! vectors, and preconditions are checked on entry so that non-finite values
//! never reach a chart.

pub mod change;
pub mod moving;
pub mod normalize;

pub use change::{count_over_thresholds, num_days_big_percent_chg, percent_changes};
pub use moving::{moving_average, simple_moving_average, MOVING_AVERAGE_WINDOW};
pub use normalize::{mean, percent_of_mean};

use crate::error::SeriesError;

pub(crate) fn require_len(
    series: &[f64],
    required: usize,
    operation: &'static str,
) -> Result<(), SeriesError> {
    if series.len() < required {
        return Err(SeriesError::TooShort {
            operation,
            required,
            actual: series.len(),
        });
    }
    Ok(())
}
