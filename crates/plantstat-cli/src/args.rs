//! Command line arguments of `plant-plots`

use clap::Parser;
use plantstat_common::{LogFormat, LoggingConfig, PlantRecord};
use plantstat_graphs::GraphConfig;
use std::path::PathBuf;

/// Create visualizations of plant growth metrics
#[derive(Parser, Debug, Clone)]
#[command(name = "plant-plots", version, about, long_about = None)]
pub struct PlotArgs {
    /// Name of the plant, used in chart titles and file names
    #[arg(long)]
    pub plant: String,

    /// Height measurements over time (cm)
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    pub height: Vec<i64>,

    /// Leaf counts over time
    #[arg(long = "leaf_count", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub leaf_count: Vec<i64>,

    /// Dry weight measurements over time (g)
    #[arg(long = "dry_weight", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub dry_weight: Vec<f64>,

    /// Directory the charts are written to [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Chart width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub figure_width: u32,

    /// Chart height in pixels
    #[arg(long, value_name = "PX", default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub figure_height: u32,

    /// Log filter directive, e.g. "info" or "plantstat_graphs=debug"
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    /// Log output format: pretty, compact or json
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    pub log_format: LogFormat,
}

impl PlotArgs {
    /// The measurements as a plant record.
    pub fn record(&self) -> PlantRecord {
        PlantRecord::new(
            self.plant.clone(),
            self.height.clone(),
            self.leaf_count.clone(),
            self.dry_weight.clone(),
        )
    }

    /// Chart defaults with the requested figure size.
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig {
            width: self.figure_width,
            height: self.figure_height,
            ..GraphConfig::default()
        }
    }

    /// Output directory; empty means the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_default()
    }

    /// Logging setup requested on the command line.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const TOMATO: [&str; 13] = [
        "plant-plots",
        "--plant",
        "Tomato",
        "--height",
        "10",
        "20",
        "30",
        "--leaf_count",
        "2",
        "4",
        "6",
        "--dry_weight",
        "1.5",
    ];

    #[test]
    fn test_parses_repeated_values() {
        let mut argv = TOMATO.to_vec();
        argv.extend(["2.0", "2.5"]);
        let args = PlotArgs::try_parse_from(argv).unwrap();

        assert_eq!(args.plant, "Tomato");
        assert_eq!(args.height, [10, 20, 30]);
        assert_eq!(args.leaf_count, [2, 4, 6]);
        assert_eq!(args.dry_weight, [1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_defaults() {
        let args = PlotArgs::try_parse_from(TOMATO).unwrap();

        assert_eq!(args.output_dir(), PathBuf::new());
        assert_eq!((args.figure_width, args.figure_height), (1000, 600));
        assert_eq!(args.log_level, "warn");
        assert_eq!(args.log_format, LogFormat::Compact);
    }

    fn argv_without(flag: &str) -> Vec<&'static str> {
        let mut skipping = false;
        TOMATO
            .iter()
            .copied()
            .filter(|token| {
                if token.starts_with("--") {
                    skipping = *token == flag;
                }
                !skipping
            })
            .collect()
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        for flag in ["--plant", "--height", "--leaf_count", "--dry_weight"] {
            let err = PlotArgs::try_parse_from(argv_without(flag)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "without {flag}");
        }
    }

    #[test]
    fn test_flag_without_values_is_rejected() {
        let result = PlotArgs::try_parse_from([
            "plant-plots",
            "--plant",
            "Tomato",
            "--height",
            "--leaf_count",
            "2",
            "--dry_weight",
            "1.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let mut argv = TOMATO.to_vec();
        argv[4] = "ten";
        let err = PlotArgs::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let args = PlotArgs::try_parse_from([
            "plant-plots",
            "--plant",
            "Odd",
            "--height",
            "-3",
            "5",
            "--leaf_count",
            "-1",
            "2",
            "--dry_weight",
            "-0.5",
        ])
        .unwrap();
        assert_eq!(args.height, [-3, 5]);
        assert_eq!(args.dry_weight, [-0.5]);
    }

    #[test]
    fn test_optional_flags() {
        let mut argv = TOMATO.to_vec();
        argv.extend([
            "--output-dir",
            "charts",
            "--figure-width",
            "640",
            "--figure-height",
            "480",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ]);
        let args = PlotArgs::try_parse_from(argv).unwrap();

        assert_eq!(args.output_dir(), PathBuf::from("charts"));
        let config = args.graph_config();
        assert_eq!((config.width, config.height), (640, 480));
        let logging = args.logging_config();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_zero_figure_size_is_rejected() {
        let mut argv = TOMATO.to_vec();
        argv.extend(["--figure-width", "0"]);
        assert!(PlotArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_record_keeps_sequences_independent() {
        let args = PlotArgs::try_parse_from([
            "plant-plots",
            "--plant",
            "Mint",
            "--height",
            "5",
            "7",
            "9",
            "--leaf_count",
            "3",
            "4",
            "--dry_weight",
            "0.3",
        ])
        .unwrap();
        let record = args.record();
        assert_eq!(record.height.len(), 3);
        assert_eq!(record.leaf_count.len(), 2);
        assert_eq!(record.week_labels().len(), 3);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        PlotArgs::command().debug_assert();
    }
}
