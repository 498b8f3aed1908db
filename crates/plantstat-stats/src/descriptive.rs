//! Mean, variance and standard deviation.
//!
//! All spreads are population statistics: squared deviations are divided by
//! the number of values, not by `n - 1`.

use plantstat_common::{validate_non_empty, Result};
use serde::{Deserialize, Serialize};

/// Arithmetic mean: sum of the values divided by their count.
pub fn mean<T>(values: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    validate_non_empty(values, "values")?;
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(sum / count_as_f64(values.len()))
}

/// Average squared deviation from the mean.
pub fn population_variance<T>(values: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    let mean = mean(values)?;
    let squared_deviations: f64 = values
        .iter()
        .map(|&v| {
            let deviation = v.into() - mean;
            deviation * deviation
        })
        .sum();
    Ok(squared_deviations / count_as_f64(values.len()))
}

/// Square root of the population variance.
pub fn population_std_dev<T>(values: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    population_variance(values).map(f64::sqrt)
}

#[allow(clippy::cast_precision_loss)]
const fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Count, mean and population standard deviation of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl Summary {
    /// Summarizes a non-empty sequence.
    pub fn from_values<T>(values: &[T]) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let mean = mean(values)?;
        let std_dev = population_std_dev(values)?;
        tracing::debug!(count = values.len(), mean, std_dev, "summarized sequence");
        Ok(Self {
            count: values.len(),
            mean,
            std_dev,
        })
    }
}
