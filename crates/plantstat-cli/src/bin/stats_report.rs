//! `stats-report`: mean and standard deviation of a built-in sample.

use anyhow::Result;
use plantstat_cli::run_stats_report;
use plantstat_common::init_default_logging;

fn main() -> Result<()> {
    init_default_logging()?;
    run_stats_report(&mut std::io::stdout().lock())?;
    Ok(())
}
