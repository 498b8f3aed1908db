//! Equal-width histogram binning.
//!
//! The range spans `[min, max]` of the data. A constant sequence gets the
//! range `[v - 0.5, v + 0.5]`. Every bin is half-open `[lo, hi)` except the
//! last one, which also holds values equal to the upper edge.

use plantstat_common::{validate_non_empty, PlantStatError, Result};
use serde::{Deserialize, Serialize};

/// Frequency counts over `bins` equal-width intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u32>,
}

/// One interval of a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge (inclusive only for the last bin)
    pub upper: f64,
    /// Number of values falling in the interval
    pub count: u32,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width intervals.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        validate_non_empty(values, "values")?;
        if bins == 0 {
            return Err(PlantStatError::validation_field(
                "histogram needs at least one bin",
                "bins",
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(PlantStatError::validation_field(
                format!("cannot bin non-finite value {bad}"),
                "values",
            ));
        }

        let (mut lower, mut upper) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }
        if !(upper - lower).is_finite() {
            return Err(PlantStatError::validation_field(
                format!("range {lower}..{upper} is too wide to split into bins"),
                "values",
            ));
        }

        let edges = equal_width_edges(lower, upper, bins);
        let mut counts = vec![0u32; bins];
        for &value in values {
            counts[bin_index(&edges, value)] += 1;
        }

        tracing::debug!(?edges, ?counts, "binned {} values", values.len());
        Ok(Self { edges, counts })
    }

    /// The `bins + 1` ascending bin edges.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of values in each bin.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total number of binned values.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Bins with their edges, in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| Bin {
                lower: edge[0],
                upper: edge[1],
                count,
            })
    }
}

#[allow(clippy::cast_precision_loss)]
fn equal_width_edges(lower: f64, upper: f64, bins: usize) -> Vec<f64> {
    let width = (upper - lower) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| lower + width * i as f64).collect();
    edges[bins] = upper;
    edges
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len() - 1;
    let lower = edges[0];
    let upper = edges[bins];
    if value >= upper {
        return bins - 1;
    }

    let width = (upper - lower) / bins as f64;
    let mut index = (((value - lower) / width).floor().max(0.0) as usize).min(bins - 1);

    // Rounding in the division can land one bin off near an edge.
    if value < edges[index] && index > 0 {
        index -= 1;
    } else if index + 1 < bins && value >= edges[index + 1] {
        index += 1;
    }
    index
}
