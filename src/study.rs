//! Study driver: turns market data into charts and tables.
//!
//! Computation is kept apart from output. The chart builders return plain
//! [`LineChart`] values, and [`run`] hands each one to an injected
//! [`ChartRenderer`] in order.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    chart::{
        days_axis_label, labels::default_reference_date, plot_template_since, ChartLabels,
        ChartRenderer, Line, LineChart,
    },
    data::{MarketData, StockIndex},
    error::SeriesError,
    stats::{self, MOVING_AVERAGE_WINDOW},
};

/// Percentage-change thresholds plotted on the big-move chart.
pub const DEFAULT_THRESHOLDS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub struct StudyOptions {
    pub thresholds: Vec<f64>,
    pub reference_date: NaiveDate,
}

impl Default for StudyOptions {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            reference_date: default_reference_date(),
        }
    }
}

/// Count of big-move days per index, one entry per threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub thresholds: Vec<f64>,
    pub counts: IndexMap<StockIndex, Vec<usize>>,
}

impl ThresholdTable {
    pub fn compute(data: &MarketData, thresholds: &[f64]) -> Result<Self, SeriesError> {
        let mut counts = IndexMap::new();
        for (index, values) in data.iter() {
            counts.insert(index, stats::count_over_thresholds(values, thresholds)?);
        }
        Ok(Self {
            thresholds: thresholds.to_vec(),
            counts,
        })
    }

    pub fn counts_for(&self, index: StockIndex) -> &[usize] {
        self.counts.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Write `threshold,djia,sp500,nasdaq` rows.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut header = vec!["threshold".to_string()];
        header.extend(self.counts.keys().map(|index| index.slug().to_string()));
        csv_writer.write_record(&header)?;
        for (row, threshold) in self.thresholds.iter().enumerate() {
            let mut record = vec![threshold.to_string()];
            record.extend(
                self.counts
                    .values()
                    .map(|counts| counts.get(row).copied().unwrap_or(0).to_string()),
            );
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

fn days_as_x(days: &[i64]) -> impl Iterator<Item = f64> + '_ {
    days.iter().map(|day| *day as f64)
}

/// Every index as a percentage of its own mean, overlaid on one chart.
pub fn percent_of_mean_chart(
    data: &MarketData,
    reference: NaiveDate,
) -> Result<LineChart, SeriesError> {
    let labels = ChartLabels::untitled(days_axis_label(reference), "Percent of Mean");
    let mut chart = LineChart::new("percent_of_mean", labels);
    for (index, values) in data.iter() {
        let percents = stats::percent_of_mean(values)?;
        chart.push_line(Line::from_xy(
            index.display_name(),
            index.overlay_color(),
            days_as_x(data.days()),
            &percents,
        ));
    }
    Ok(chart)
}

/// Days with a big move against the threshold that defines "big".
pub fn threshold_chart(table: &ThresholdTable) -> LineChart {
    let labels = ChartLabels::untitled("Percentage Change Threshold Magnitude", "Number of Days");
    let mut chart = LineChart::new("big_change_days", labels);

    let lo = table.thresholds.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = table
        .thresholds
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() && hi > lo {
        chart = chart.with_x_range(lo..hi);
    }

    for (index, counts) in &table.counts {
        let counts: Vec<f64> = counts.iter().map(|count| *count as f64).collect();
        chart.push_line(Line::from_xy(
            index.display_name(),
            index.overlay_color(),
            table.thresholds.iter().copied(),
            &counts,
        ));
    }
    chart
}

/// One index against its three-day moving average. Both lines start on the
/// third trading day, where the first full window ends.
pub fn moving_average_chart(
    data: &MarketData,
    index: StockIndex,
    reference: NaiveDate,
) -> Result<LineChart, SeriesError> {
    let values = data.series(index);
    let averaged = stats::moving_average(values)?;
    let offset = MOVING_AVERAGE_WINDOW - 1;
    let (ma_color, raw_color) = index.moving_average_colors();

    let labels = plot_template_since(index.display_name(), reference);
    let mut chart = LineChart::new(format!("moving_average_{}", index.slug()), labels);
    chart.push_line(Line::from_xy(
        "MA",
        ma_color,
        days_as_x(&data.days()[offset..]),
        &averaged,
    ));
    chart.push_line(Line::from_xy(
        "Non-MA",
        raw_color,
        days_as_x(&data.days()[offset..]),
        &values[offset..],
    ));
    Ok(chart)
}

/// All five study charts in output order.
pub fn build_charts(data: &MarketData, options: &StudyOptions) -> Result<Vec<LineChart>> {
    let mut charts = Vec::with_capacity(2 + StockIndex::ALL.len());
    charts.push(
        percent_of_mean_chart(data, options.reference_date)
            .context("computing percent of mean")?,
    );

    let table = ThresholdTable::compute(data, &options.thresholds)
        .context("counting big percentage changes")?;
    debug!(?table, "threshold counts");
    charts.push(threshold_chart(&table));

    for index in StockIndex::ALL {
        charts.push(
            moving_average_chart(data, index, options.reference_date)
                .with_context(|| format!("moving average of {index}"))?,
        );
    }
    Ok(charts)
}

/// Compute every chart, then render them one after another.
#[instrument(skip_all, fields(days = data.len()))]
pub fn run<R>(data: &MarketData, options: &StudyOptions, renderer: &mut R) -> Result<Vec<PathBuf>>
where
    R: ChartRenderer + ?Sized,
{
    let charts = build_charts(data, options)?;
    let mut written = Vec::with_capacity(charts.len());
    for chart in &charts {
        let path = renderer
            .render(chart)
            .with_context(|| format!("rendering {}", chart.file_stem))?;
        written.push(path);
    }
    info!(charts = written.len(), "rendered study charts");
    Ok(written)
}

/// Write a `day,<name>...` table. Every column must be as long as `days`.
pub fn write_series_csv<W: std::io::Write>(
    writer: W,
    days: &[i64],
    columns: &[(&str, &[f64])],
) -> Result<()> {
    for (name, values) in columns {
        anyhow::ensure!(
            values.len() == days.len(),
            "column {name} has {} values for {} days",
            values.len(),
            days.len()
        );
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut header = vec!["day"];
    header.extend(columns.iter().map(|(name, _)| *name));
    csv_writer.write_record(&header)?;
    for (row, day) in days.iter().enumerate() {
        let mut record = vec![day.to_string()];
        record.extend(columns.iter().map(|(_, values)| values[row].to_string()));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Percent-of-mean for every index, aligned to the full day axis.
pub fn export_percent_of_mean(data: &MarketData, path: &Path) -> Result<()> {
    let mut columns = Vec::new();
    for (index, values) in data.iter() {
        columns.push((index.slug(), stats::percent_of_mean(values)?));
    }
    let borrowed: Vec<(&str, &[f64])> = columns
        .iter()
        .map(|(name, values)| (*name, values.as_slice()))
        .collect();
    write_to(path, |file| write_series_csv(file, data.days(), &borrowed))
}

/// Three-day moving averages for every index, aligned to the day each window ends.
pub fn export_moving_average(data: &MarketData, path: &Path) -> Result<()> {
    let mut columns = Vec::new();
    for (index, values) in data.iter() {
        columns.push((index.slug(), stats::moving_average(values)?));
    }
    let borrowed: Vec<(&str, &[f64])> = columns
        .iter()
        .map(|(name, values)| (*name, values.as_slice()))
        .collect();
    let days = &data.days()[MOVING_AVERAGE_WINDOW - 1..];
    write_to(path, |file| write_series_csv(file, days, &borrowed))
}

pub(crate) fn write_to<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write(file)?;
    info!(path = %path.display(), "wrote table");
    Ok(())
}
