//! Test utilities and shared test helpers for Plant Stats.
//!
//! Fixtures and helper functions used by unit and integration tests across
//! the workspace.

use crate::PlantRecord;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Plant record fixtures.
pub mod plant_fixtures {
    use super::PlantRecord;

    /// The three-week tomato record used throughout the docs.
    pub fn tomato() -> PlantRecord {
        PlantRecord::new("Tomato", vec![10, 20, 30], vec![2, 4, 6], vec![1.5, 2.0, 2.5])
    }

    /// A longer record with uneven dry weight sampling.
    pub fn sunflower() -> PlantRecord {
        PlantRecord::new(
            "Sunflower",
            vec![12, 25, 41, 60, 84, 110],
            vec![4, 6, 9, 12, 16, 20],
            vec![0.8, 1.9, 3.4, 5.2],
        )
    }

    /// Heights and leaf counts of different lengths.
    pub fn mismatched() -> PlantRecord {
        PlantRecord::new("Mint", vec![5, 7, 9], vec![3, 4], vec![0.3, 0.4, 0.6])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_within_tolerance() {
        assert_approx_eq(1.0, 1.0 + 1e-12, 1e-9);
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn test_assert_approx_eq_outside_tolerance() {
        assert_approx_eq(1.0, 1.1, 1e-3);
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(plant_fixtures::tomato().height.len(), 3);
        let mismatched = plant_fixtures::mismatched();
        assert_ne!(mismatched.height.len(), mismatched.leaf_count.len());
    }
}
