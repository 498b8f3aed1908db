//! `plant-plots`: scatter, histogram and line charts for one plant.

use anyhow::Result;
use clap::Parser;
use plantstat_cli::{run_plant_plots, PlotArgs};
use plantstat_common::init_logging;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = PlotArgs::parse();
    init_logging(&args.logging_config())?;

    info!("Generating plots for {}", args.plant);

    let stdout = std::io::stdout();
    if let Err(e) = run_plant_plots(&args, &mut stdout.lock()) {
        error!("Plot generation failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
