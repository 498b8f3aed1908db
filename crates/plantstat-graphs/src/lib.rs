//! # Plant Stats Graphs
//!
//! Chart rendering for plant growth data using plotters.
//!
//! Each chart type implements [`GraphRenderer`]; [`PlotGenerator`] writes the
//! scatter, histogram and line charts for one plant as PNG files.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
pub mod histogram;
pub mod line_plot;
pub mod renderer;
pub mod scatter;
pub mod types;

pub use generator::*;
pub use histogram::*;
pub use line_plot::*;
pub use renderer::*;
pub use scatter::*;
pub use types::*;
