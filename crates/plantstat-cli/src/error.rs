//! Application-wide error types using thiserror.

use plantstat_common::PlantStatError;

/// Error returned by the command line front ends.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Statistics, chart or logging failure.
    #[error(transparent)]
    PlantStat(#[from] PlantStatError),

    /// Writing to standard output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for the command line front ends.
pub type CliResult<T> = Result<T, CliError>;
