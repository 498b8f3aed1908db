//! Utility functions used across the Plant Stats crates

use crate::{PlantStatError, Result, WeekLabel};

/// Generate `Week-1` through `Week-<count>`.
pub fn week_labels(count: usize) -> Vec<WeekLabel> {
    (1..=count).map(WeekLabel).collect()
}

/// Validate that a sequence holds at least one value
pub fn validate_non_empty<'a, T>(values: &'a [T], field_name: &str) -> Result<&'a [T]> {
    if values.is_empty() {
        Err(PlantStatError::validation_field(
            format!("{field_name} must contain at least one value"),
            field_name,
        ))
    } else {
        Ok(values)
    }
}
