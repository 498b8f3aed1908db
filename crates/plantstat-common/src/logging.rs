//! Structured logging infrastructure for Plant Stats
//!
//! Diagnostics always go to stderr. Stdout is reserved for the lines the
//! tools print for the user.

use crate::{PlantStatError, Result};
use std::fmt;
use std::io::{self, IsTerminal};
use std::str::FromStr;
use tracing_subscriber::{
    fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Output format of the diagnostic log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
    /// Newline delimited JSON objects
    Json,
}

impl FromStr for LogFormat {
    type Err = PlantStatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(PlantStatError::validation_field(
                format!("unknown log format '{other}' (expected pretty, compact or json)"),
                "log_format",
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "info", "plantstat_graphs=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            include_targets: true,
            ansi: io::stderr().is_terminal(),
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if the filter directive does not parse or if a global subscriber
/// has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).map_err(|err| {
        PlantStatError::config_with_source(format!("invalid log filter '{}'", config.level), err)
    })?;

    tracing_subscriber::registry()
        .with(fmt_layer(config))
        .with(env_filter)
        .try_init()
        .map_err(|err| PlantStatError::config_with_source("failed to install tracing subscriber", err))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

fn fmt_layer(config: &LoggingConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.include_targets)
        .with_ansi(config.ansi);

    match config.format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.include_targets);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = LoggingConfig {
            level: "plantstat=verbose".to_string(),
            ..LoggingConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, PlantStatError::Config { .. }));
    }
}
