//! CLI entry-point for the percent-of-mean export.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use super::DataArgs;
use crate::{config::Settings, study};

/// Args for the `normalize` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let data = args.data.load(&settings)?;
    let out_path = settings.join_output("percent_of_mean.csv");
    study::export_percent_of_mean(&data, &out_path)?;
    println!("{}", out_path.display());
    Ok(())
}
