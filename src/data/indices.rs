//! CSV loader for the daily index table.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use super::{MarketData, StockIndex};
use crate::error::DataError;

#[derive(Debug, Deserialize)]
struct IndexRow {
    day: i64,
    djia: f64,
    sp500: f64,
    nasdaq: f64,
}

/// Load `day,djia,sp500,nasdaq` rows from a CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<MarketData> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let data = from_reader(file).with_context(|| format!("reading {}", path.display()))?;
    info!(path = %path.display(), days = data.len(), "loaded index series");
    Ok(data)
}

/// Parse the index table from any reader. The header row is required.
pub fn from_reader<R: Read>(reader: R) -> Result<MarketData, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut days = Vec::new();
    let mut columns: IndexMap<StockIndex, Vec<f64>> = StockIndex::ALL
        .iter()
        .map(|index| (*index, Vec::new()))
        .collect();
    for row in csv_reader.deserialize::<IndexRow>() {
        let row = row?;
        days.push(row.day);
        for (index, value) in [
            (StockIndex::Djia, row.djia),
            (StockIndex::Sp500, row.sp500),
            (StockIndex::Nasdaq, row.nasdaq),
        ] {
            columns.entry(index).or_default().push(value);
        }
    }
    MarketData::new(days, columns)
}
