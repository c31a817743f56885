//! Command-line interface wiring for index-study.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::{
    config::{parse_thresholds, Settings},
    data::{indices, MarketData},
    study::StudyOptions,
};

pub mod changes;
pub mod normalize;
pub mod plot;
pub mod smooth;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Stock index statistics and charts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Plot(args) => plot::run(args, settings),
            Commands::Changes(args) => changes::run(args, settings),
            Commands::Normalize(args) => normalize::run(args, settings),
            Commands::Smooth(args) => smooth::run(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render all study charts as PNG files.
    Plot(plot::Args),
    /// Count days whose percentage change exceeds each threshold.
    Changes(changes::Args),
    /// Export every index as a percent of its mean.
    Normalize(normalize::Args),
    /// Export three-day moving averages.
    Smooth(smooth::Args),
}

/// Input flags shared by every sub-command.
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// CSV with `day,djia,sp500,nasdaq` columns; defaults to `DATA_FILE`.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Comma separated percentage thresholds; defaults to `THRESHOLDS`.
    #[arg(long)]
    pub thresholds: Option<String>,
}

impl DataArgs {
    pub fn load(&self, settings: &Settings) -> Result<MarketData> {
        let path = self.input.as_ref().unwrap_or(&settings.data_file);
        indices::load_csv(path)
    }

    pub fn options(&self, settings: &Settings) -> Result<StudyOptions> {
        let thresholds = match &self.thresholds {
            Some(raw) => parse_thresholds(raw)?,
            None => settings.thresholds.clone(),
        };
        Ok(StudyOptions {
            thresholds,
            reference_date: settings.reference_date,
        })
    }
}
