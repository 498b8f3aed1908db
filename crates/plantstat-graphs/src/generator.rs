//! Produces the three charts for one plant record

use crate::{
    ColorScheme, GraphConfig, GraphRenderer, GraphType, HistogramGraph, LinePlotGraph,
    ScatterGraph,
};
use plantstat_common::{PlantRecord, Result};
use std::path::{Path, PathBuf};

/// Number of dry weight bins used unless overridden.
pub const DEFAULT_HISTOGRAM_BINS: usize = 5;

// Applied only while the base config uses the default palette
const SCATTER_COLORS: &[&str] = &["#0000FF"];
// Bar fill, then bar outline
const HISTOGRAM_COLORS: &[&str] = &["#008000", "#000000"];
const LINE_COLORS: &[&str] = &["#FF0000"];

/// Paths of the charts written by [`PlotGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlots {
    /// Height against leaf count
    pub scatter: PathBuf,
    /// Dry weight distribution
    pub histogram: PathBuf,
    /// Height over weeks
    pub line_plot: PathBuf,
}

impl GeneratedPlots {
    /// All paths in generation order.
    pub fn paths(&self) -> [&Path; 3] {
        [&self.scatter, &self.histogram, &self.line_plot]
    }
}

/// Renders scatter, histogram and line charts for a plant.
///
/// Charts are written in that order. A failing chart aborts the run; files
/// already written by earlier steps are left in place.
#[derive(Debug, Clone)]
pub struct PlotGenerator {
    output_dir: PathBuf,
    base_config: GraphConfig,
    histogram_bins: usize,
}

impl PlotGenerator {
    /// Writes into `output_dir`; an empty path means the working directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_config: GraphConfig::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }

    /// Size and styling shared by every chart.
    ///
    /// Titles, axis labels and graph type are always replaced per chart.
    #[must_use]
    pub fn with_base_config(mut self, config: GraphConfig) -> Self {
        self.base_config = config;
        self
    }

    /// Overrides the dry weight bin count.
    #[must_use]
    pub const fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Directory charts are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the chart of `graph_type` for `plant` is written.
    pub fn output_path(&self, graph_type: GraphType, plant: &str) -> PathBuf {
        self.output_dir.join(graph_type.file_name(plant))
    }

    /// Title, labels and colors of one chart for `plant`.
    pub fn config_for(&self, graph_type: GraphType, plant: &str) -> GraphConfig {
        let (title, x_label, y_label, colors): (String, &str, &str, &[&str]) = match graph_type {
            GraphType::Scatter => (
                format!("Height vs Leaf Count for {plant}"),
                "Height (cm)",
                "Leaf Count",
                SCATTER_COLORS,
            ),
            GraphType::Histogram => (
                format!("Histogram of Dry Weight for {plant}"),
                "Dry Weight (g)",
                "Frequency",
                HISTOGRAM_COLORS,
            ),
            GraphType::Line => (
                format!("{plant} Height Over Time"),
                "Week",
                "Height (cm)",
                LINE_COLORS,
            ),
        };

        let mut config = self.base_config.clone();
        config.graph_type = graph_type;
        config.title = title;
        config.x_label = Some(x_label.to_string());
        config.y_label = Some(y_label.to_string());
        if config.style.color_scheme == ColorScheme::Default {
            config.style.color_scheme =
                ColorScheme::Custom(colors.iter().map(ToString::to_string).collect());
        }
        config
    }

    /// Writes the three charts for `record` and returns their paths.
    pub fn generate(&self, record: &PlantRecord) -> Result<GeneratedPlots> {
        let span = tracing::info_span!("generate_plots", plant = %record.name);
        let _enter = span.enter();

        if !self.output_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.output_dir)?;
        }

        let scatter =
            ScatterGraph::from_series(&record.height_values(), &record.leaf_count_values())
                .inspect_err(|err| tracing::error!("Cannot pair height with leaf count: {}", err))?;
        let scatter_path = self.render(&scatter, GraphType::Scatter, &record.name)?;

        let histogram = HistogramGraph::from_values(&record.dry_weight, self.histogram_bins)?;
        let histogram_path = self.render(&histogram, GraphType::Histogram, &record.name)?;

        let line_plot = LinePlotGraph::from_series(&record.height_values())?;
        let line_plot_path = self.render(&line_plot, GraphType::Line, &record.name)?;

        tracing::info!("Generated all charts");
        Ok(GeneratedPlots {
            scatter: scatter_path,
            histogram: histogram_path,
            line_plot: line_plot_path,
        })
    }

    fn render<G: GraphRenderer>(
        &self,
        graph: &G,
        graph_type: GraphType,
        plant: &str,
    ) -> Result<PathBuf> {
        let path = self.output_path(graph_type, plant);
        let config = self.config_for(graph_type, plant);
        graph.render_to_file(&config, &path)?;
        Ok(path)
    }
}

impl Default for PlotGenerator {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}
