//! Mean and standard deviation report over a fixed array.

use crate::descriptive::Summary;
use plantstat_common::Result;
use serde::Serialize;
use std::fmt;

/// The array reported on by `stats-report`.
pub const EMBEDDED_VALUES: [i32; 5] = [5, 6, 7, 8, 9];

/// Computes the two-line mean / standard deviation report.
#[derive(Debug, Clone)]
pub struct StatsReporter {
    values: Vec<f64>,
}

impl StatsReporter {
    /// Creates a reporter over arbitrary values.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Creates a reporter over [`EMBEDDED_VALUES`].
    pub fn embedded() -> Self {
        Self::new(EMBEDDED_VALUES.iter().copied().map(f64::from))
    }

    /// Values the report is computed from.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Computes the report.
    pub fn report(&self) -> Result<StatsReport> {
        let summary = Summary::from_values(&self.values)?;
        Ok(StatsReport {
            mean: summary.mean,
            std_dev: summary.std_dev,
        })
    }
}

/// Mean and population standard deviation, displayed as two lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsReport {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl fmt::Display for StatsReport {
    // `{:?}` keeps the fractional part of whole numbers ("7.0", not "7").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean of the array: {:?}", self.mean)?;
        write!(f, "Standard Deviation of the array: {:?}", self.std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_report() {
        let report = StatsReporter::embedded().report().unwrap();
        assert_eq!(report.mean, 7.0);
        assert!((report.std_dev - 1.4142).abs() < 1e-4);
    }

    #[test]
    fn test_report_lines() {
        let report = StatsReporter::embedded().report().unwrap();
        assert_eq!(
            report.to_string(),
            "Mean of the array: 7.0\nStandard Deviation of the array: 1.4142135623730951"
        );
    }

    #[test]
    fn test_custom_values() {
        let reporter = StatsReporter::new([1.0, 3.0]);
        assert_eq!(reporter.values(), &[1.0, 3.0]);
        let report = reporter.report().unwrap();
        assert_eq!(report.to_string(), "Mean of the array: 2.0\nStandard Deviation of the array: 1.0");
    }

    #[test]
    fn test_empty_reporter_fails() {
        assert!(StatsReporter::new(Vec::new()).report().is_err());
    }
}
