//! Descriptive statistics and charts for daily stock-index series.
//!
//! The numeric core lives in [`stats`]; [`study`] assembles it into charts that
//! any [`chart::ChartRenderer`] can draw.

pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod stats;
pub mod study;

pub use error::{DataError, ErrorKind, SeriesError};
