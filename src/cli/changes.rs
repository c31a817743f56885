//! CLI entry-point for big percentage-change counts.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use super::DataArgs;
use crate::{
    config::Settings,
    study::{self, ThresholdTable},
};

/// Args for the `changes` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
    /// Print the table as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let data = args.data.load(&settings)?;
    let options = args.data.options(&settings)?;
    let table = ThresholdTable::compute(&data, &options.thresholds)
        .context("counting big percentage changes")?;

    let out_path = settings.join_output("big_change_days.csv");
    study::write_to(&out_path, |file| table.write_csv(file))?;
    info!(thresholds = table.thresholds.len(), "counted big-move days");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render_text(&table));
    }
    Ok(())
}

/// Fixed-width text table, one row per threshold.
pub fn render_text(table: &ThresholdTable) -> String {
    let mut out = format!("{:>10}", "threshold");
    for index in table.counts.keys() {
        out.push_str(&format!("{:>10}", index.display_name()));
    }
    out.push('\n');
    for (row, threshold) in table.thresholds.iter().enumerate() {
        out.push_str(&format!("{threshold:>10.2}"));
        for counts in table.counts.values() {
            let count = counts.get(row).copied().unwrap_or(0);
            out.push_str(&format!("{count:>10}"));
        }
        out.push('\n');
    }
    out
}
