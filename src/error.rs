//! Error types shared by the numeric core and the data loader.

use thiserror::Error;

/// Coarse classification of a [`SeriesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The series or a parameter does not satisfy the operation's preconditions.
    InvalidInput,
    /// A denominator was zero or a value was not finite.
    ArithmeticDegenerate,
}

/// Failure of one of the series transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("{operation} needs at least {required} values, got {actual}")]
    TooShort {
        operation: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("window size must be at least 1")]
    InvalidWindow { window: usize },
    #[error("threshold must be a positive finite percentage, got {0}")]
    InvalidThreshold(f64),
    #[error("series mean is {mean}; cannot express values as a percent of it")]
    DegenerateMean { mean: f64 },
    #[error("{operation} divides by zero at index {index}")]
    ZeroDenominator {
        operation: &'static str,
        index: usize,
    },
    #[error("{operation} found a non-finite value at index {index}")]
    NonFinite {
        operation: &'static str,
        index: usize,
    },
}

impl SeriesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooShort { .. } | Self::InvalidWindow { .. } | Self::InvalidThreshold(_) => {
                ErrorKind::InvalidInput
            }
            Self::DegenerateMean { .. } | Self::ZeroDenominator { .. } | Self::NonFinite { .. } => {
                ErrorKind::ArithmeticDegenerate
            }
        }
    }
}

/// Failure while assembling [`crate::data::MarketData`].
#[derive(Debug, Error)]
pub enum DataError {
    #[error("column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("need at least {required} trading days, got {actual}")]
    TooFewRows { required: usize, actual: usize },
    #[error("column {column} row {row} is not a finite number")]
    NonFinite { column: String, row: usize },
    #[error("missing series for {0}")]
    MissingSeries(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
