//! What the two tools do once their arguments are known.
//!
//! Both functions write their user-facing lines to `out` and leave
//! diagnostics to `tracing`, which the binaries route to stderr.

use crate::{CliResult, PlotArgs};
use plantstat_common::PlantRecord;
use plantstat_graphs::{GeneratedPlots, PlotGenerator};
use plantstat_stats::{StatsReport, StatsReporter};
use std::io::Write;

/// Echoes the inputs, writes the three charts and confirms their paths.
///
/// The echo is written before any chart is attempted, so it appears even
/// when generation fails.
pub fn run_plant_plots(args: &PlotArgs, out: &mut impl Write) -> CliResult<GeneratedPlots> {
    let record = args.record();
    write_inputs(&record, out)?;
    out.flush()?;

    let generator = PlotGenerator::new(args.output_dir()).with_base_config(args.graph_config());
    let plots = generator.generate(&record)?;

    writeln!(out, "Generated plots for {}:", record.name)?;
    writeln!(out, "Scatter plot saved as {}", plots.scatter.display())?;
    writeln!(out, "Histogram saved as {}", plots.histogram.display())?;
    writeln!(out, "Line plot saved as {}", plots.line_plot.display())?;
    Ok(plots)
}

/// Prints the mean and standard deviation of the built-in sample.
pub fn run_stats_report(out: &mut impl Write) -> CliResult<StatsReport> {
    let report = StatsReporter::embedded().report()?;
    writeln!(out, "{report}")?;
    Ok(report)
}

fn write_inputs(record: &PlantRecord, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Plant: {}", record.name)?;
    writeln!(out, "Height data: {:?} cm", record.height)?;
    writeln!(out, "Leaf count data: {:?}", record.leaf_count)?;
    writeln!(out, "Dry weight data: [{}] g", format_floats(&record.dry_weight))
}

fn format_floats(values: &[f64]) -> String {
    values.iter().map(|&v| format_float(v)).collect::<Vec<_>>().join(", ")
}

/// Shortest round-trip form; exponents carry a sign and at least two
/// digits (`1e-05`, `1.5e+16`).
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => repr,
        },
        None => repr,
    }
}
