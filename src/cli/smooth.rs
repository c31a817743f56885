//! CLI entry-point for the moving-average export.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use super::DataArgs;
use crate::{config::Settings, study};

/// Args for the `smooth` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let data = args.data.load(&settings)?;
    let out_path = settings.join_output("moving_average.csv");
    study::export_moving_average(&data, &out_path)?;
    println!("{}", out_path.display());
    Ok(())
}
