//! CLI entry-point for rendering the study charts.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use super::DataArgs;
use crate::{chart::PngRenderer, config::Settings, study};

/// Args for the `plot` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let data = args.data.load(&settings)?;
    let options = args.data.options(&settings)?;
    let mut renderer = PngRenderer::new(&settings.outputs_dir, settings.chart_size());
    for path in study::run(&data, &options, &mut renderer)? {
        println!("{}", path.display());
    }
    Ok(())
}
