//! # Plant Stats Statistics
//!
//! Descriptive statistics over numeric sequences: arithmetic mean,
//! population variance and standard deviation, equal-width histogram
//! binning, and the report printed by the `stats-report` tool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod descriptive;
pub mod histogram;
pub mod reporter;

pub use descriptive::*;
pub use histogram::*;
pub use reporter::*;
