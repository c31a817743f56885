//! Title and axis text for the index charts.

use chrono::NaiveDate;
use serde::Serialize;

/// Day the trading-day axis counts from unless configured otherwise.
pub const DEFAULT_REFERENCE_DATE: (i32, u32, u32) = (2016, 6, 1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLabels {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn untitled(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: None,
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

pub fn default_reference_date() -> NaiveDate {
    let (year, month, day) = DEFAULT_REFERENCE_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// `Trading Days since Jun 1, 2016` style axis label.
pub fn days_axis_label(reference: NaiveDate) -> String {
    format!("Trading Days since {}", reference.format("%b %-d, %Y"))
}

/// Labels for a series plotted against its three-day moving average.
pub fn plot_template(name: &str) -> ChartLabels {
    plot_template_since(name, default_reference_date())
}

pub fn plot_template_since(name: &str, reference: NaiveDate) -> ChartLabels {
    ChartLabels {
        title: Some(format!("Three-Day Moving Average of {name}")),
        x_label: days_axis_label(reference),
        y_label: "Moving Average of Index".to_string(),
    }
}
