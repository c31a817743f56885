//! Market data model and loaders.

pub mod indices;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{chart::LineColor, error::DataError};

/// Minimum number of trading days every chart needs.
pub const MIN_TRADING_DAYS: usize = 3;

/// The three indices tracked by the study, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockIndex {
    Djia,
    Sp500,
    Nasdaq,
}

impl StockIndex {
    pub const ALL: [StockIndex; 3] = [StockIndex::Djia, StockIndex::Sp500, StockIndex::Nasdaq];

    /// Human readable name used in legends and titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Djia => "DJIA",
            Self::Sp500 => "S&P 500",
            Self::Nasdaq => "NASDAQ",
        }
    }

    /// Lowercase identifier used for CSV headers and file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Djia => "djia",
            Self::Sp500 => "sp500",
            Self::Nasdaq => "nasdaq",
        }
    }

    /// Line color on the overlay charts that compare all three indices.
    pub fn overlay_color(self) -> LineColor {
        match self {
            Self::Djia => LineColor::Blue,
            Self::Sp500 => LineColor::Green,
            Self::Nasdaq => LineColor::Red,
        }
    }

    /// `(moving average, raw)` line colors on the per-index chart.
    pub fn moving_average_colors(self) -> (LineColor, LineColor) {
        match self {
            Self::Djia => (LineColor::Blue, LineColor::Green),
            Self::Sp500 => (LineColor::Purple, LineColor::Orange),
            Self::Nasdaq => (LineColor::Red, LineColor::Black),
        }
    }
}

impl fmt::Display for StockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Aligned day axis and index series. Every column has the same length, at
/// least [`MIN_TRADING_DAYS`] rows, and only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    days: Vec<i64>,
    series: IndexMap<StockIndex, Vec<f64>>,
}

impl MarketData {
    /// Validate and assemble market data. Series are stored in [`StockIndex::ALL`] order.
    pub fn new(
        days: Vec<i64>,
        mut series: IndexMap<StockIndex, Vec<f64>>,
    ) -> Result<Self, DataError> {
        if days.len() < MIN_TRADING_DAYS {
            return Err(DataError::TooFewRows {
                required: MIN_TRADING_DAYS,
                actual: days.len(),
            });
        }

        let mut ordered = IndexMap::with_capacity(StockIndex::ALL.len());
        for index in StockIndex::ALL {
            let values = series
                .swap_remove(&index)
                .ok_or_else(|| DataError::MissingSeries(index.display_name().to_string()))?;
            if values.len() != days.len() {
                return Err(DataError::LengthMismatch {
                    column: index.slug().to_string(),
                    expected: days.len(),
                    actual: values.len(),
                });
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite {
                    column: index.slug().to_string(),
                    row,
                });
            }
            ordered.insert(index, values);
        }

        Ok(Self {
            days,
            series: ordered,
        })
    }

    pub fn days(&self) -> &[i64] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Values for one index. Always present after validation.
    pub fn series(&self, index: StockIndex) -> &[f64] {
        self.series.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(index, values)` in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (StockIndex, &[f64])> {
        self.series.iter().map(|(index, values)| (*index, values.as_slice()))
    }
}
