//! # Plant Stats CLI
//!
//! Command line front ends: `plant-plots` renders growth charts for one
//! plant, `stats-report` prints the summary of the built-in sample.
//!
//! The binaries are thin wrappers; argument handling and the stdout
//! protocol live here so they can be tested without spawning a process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod args;
pub mod error;

pub use app::*;
pub use args::*;
pub use error::*;
