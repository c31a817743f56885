//! Runtime configuration utilities for index-study.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{chart::labels::default_reference_date, study::DEFAULT_THRESHOLDS};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// CSV file holding the `day,djia,sp500,nasdaq` table.
    pub data_file: PathBuf,
    /// Root folder for charts and exported tables.
    pub outputs_dir: PathBuf,
    /// Chart width in pixels.
    pub chart_width: u32,
    /// Chart height in pixels.
    pub chart_height: u32,
    /// Calendar date of trading day zero, shown on the day axis.
    pub reference_date: NaiveDate,
    /// Percentage-change thresholds for the big-move counts.
    pub thresholds: Vec<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/indices.csv"),
            outputs_dir: PathBuf::from("./outputs"),
            chart_width: 1280,
            chart_height: 720,
            reference_date: default_reference_date(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.outputs_dir);
        let chart_width = env::var("CHART_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.chart_width);
        let chart_height = env::var("CHART_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.chart_height);
        let reference_date = match env::var("REFERENCE_DATE") {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("parsing REFERENCE_DATE={raw}"))?,
            Err(_) => defaults.reference_date,
        };
        let thresholds = match env::var("THRESHOLDS") {
            Ok(raw) => parse_thresholds(&raw).context("parsing THRESHOLDS")?,
            Err(_) => defaults.thresholds,
        };

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_file,
            outputs_dir,
            chart_width,
            chart_height,
            reference_date,
            thresholds,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }

    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}

/// Parse a comma separated list such as `0.2,0.4,0.6`.
pub fn parse_thresholds(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("invalid threshold {part:?}"))
        })
        .collect()
}
