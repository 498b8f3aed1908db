//! Common type definitions for plant growth data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Growth measurements of a single plant as supplied on the command line.
///
/// The three sequences are independent: nothing requires them to have the
/// same length. Consumers that pair values (the scatter chart) check lengths
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Plant name, used in chart titles and output file names.
    pub name: String,
    /// Height measurements over time, in centimeters.
    pub height: Vec<i64>,
    /// Leaf counts over time.
    pub leaf_count: Vec<i64>,
    /// Dry weight measurements over time, in grams.
    pub dry_weight: Vec<f64>,
}

impl PlantRecord {
    /// Creates a record from its name and measurement sequences.
    pub fn new(
        name: impl Into<String>,
        height: Vec<i64>,
        leaf_count: Vec<i64>,
        dry_weight: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            height,
            leaf_count,
            dry_weight,
        }
    }

    /// One week label per height measurement.
    pub fn week_labels(&self) -> Vec<WeekLabel> {
        crate::week_labels(self.height.len())
    }

    /// Heights converted for plotting.
    pub fn height_values(&self) -> Vec<f64> {
        to_f64(&self.height)
    }

    /// Leaf counts converted for plotting.
    pub fn leaf_count_values(&self) -> Vec<f64> {
        to_f64(&self.leaf_count)
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

/// Synthetic, 1-based time point label rendered as `Week-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekLabel(pub usize);

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_label_display() {
        assert_eq!(WeekLabel(1).to_string(), "Week-1");
        assert_eq!(WeekLabel(12).to_string(), "Week-12");
    }

    #[test]
    fn test_week_labels_follow_height_only() {
        let record = PlantRecord::new("Basil", vec![3, 5, 8, 13], vec![1], vec![0.2, 0.4]);
        let labels: Vec<String> = record.week_labels().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Week-1", "Week-2", "Week-3", "Week-4"]);
    }

    #[test]
    fn test_value_conversion() {
        let record = PlantRecord::new("Fern", vec![-2, 0, 7], vec![4], vec![]);
        assert_eq!(record.height_values(), vec![-2.0, 0.0, 7.0]);
        assert_eq!(record.leaf_count_values(), vec![4.0]);
    }
}
