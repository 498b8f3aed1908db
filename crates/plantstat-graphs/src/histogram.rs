//! Histogram chart of a single measurement series

use crate::{padded_range, GraphConfig, GraphRenderer, GraphType};
use plantstat_common::Result;
use plantstat_stats::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Bar chart of equal-width bins over the data range.
///
/// The first series color fills the bars, the second outlines them.
#[derive(Debug, Clone)]
pub struct HistogramGraph {
    histogram: Histogram,
}

impl HistogramGraph {
    /// Bins `values` into `bins` equal-width intervals.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        Ok(Self {
            histogram: Histogram::from_values(values, bins)?,
        })
    }

    /// The underlying bin counts and edges.
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Create a graph configuration with custom title and labels
    pub fn config(title: &str, x_label: &str, y_label: &str) -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Histogram,
            title: title.to_string(),
            x_label: Some(x_label.to_string()),
            y_label: Some(y_label.to_string()),
            ..Default::default()
        }
    }

    fn y_max(&self) -> f64 {
        (f64::from(self.histogram.max_count()) * 1.1).max(1.0)
    }
}

impl GraphRenderer for HistogramGraph {
    fn name(&self) -> &'static str {
        "histogram"
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        root.fill(&self.get_background_color(config))?;

        let x_range = padded_range(self.histogram.edges().iter().copied());
        let y_max = self.y_max();

        let style = &config.style;
        let title_font = (style.title_font.family.as_str(), style.title_font.size);
        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, title_font)
            .margin_top(style.margins.top)
            .margin_right(style.margins.right)
            .x_label_area_size(style.margins.bottom)
            .y_label_area_size(style.margins.left)
            .build_cartesian_2d(x_range, 0.0..y_max)?;

        let grid_color = self.get_grid_color(config);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .axis_desc_style((style.axis_font.family.as_str(), style.axis_font.size).into_font())
            .label_style((style.label_font.family.as_str(), style.label_font.size).into_font())
            .bold_line_style(grid_color.mix(0.6))
            .light_line_style(grid_color.mix(0.15));
        if !style.grid.show_x {
            mesh.disable_x_mesh();
        }
        if !style.grid.show_y {
            mesh.disable_y_mesh();
        }
        mesh.draw()?;

        let fill_color = self.series_color(config, 0);
        let edge_color = self.series_color(config, 1);

        // Empty bins still get an outline along the axis
        for bin in self.histogram.bins() {
            let corners = [(bin.lower, 0.0), (bin.upper, f64::from(bin.count))];
            chart.draw_series(std::iter::once(Rectangle::new(corners, fill_color.filled())))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                corners,
                edge_color.stroke_width(1),
            )))?;
        }

        tracing::debug!(
            bins = self.histogram.bin_count(),
            max_count = self.histogram.max_count(),
            "histogram bars drawn"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorScheme;
    use tempfile::TempDir;

    #[test]
    fn test_five_bins_over_dry_weight() {
        let graph = HistogramGraph::from_values(&[1.5, 2.0, 2.5], 5).unwrap();
        assert_eq!(graph.histogram().counts(), &[1, 0, 1, 0, 1]);
        assert!((graph.y_max() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values_fail() {
        assert!(HistogramGraph::from_values(&[], 5).is_err());
    }

    #[test]
    fn test_render_to_file() {
        let graph = HistogramGraph::from_values(&[0.8, 1.9, 3.4, 5.2, 5.2, 2.2], 5).unwrap();

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("histogram.png");
        let mut config = HistogramGraph::config("Test Histogram", "Dry Weight (g)", "Frequency");
        config.style.color_scheme =
            ColorScheme::Custom(vec!["#008000".to_string(), "#000000".to_string()]);

        let result = graph.render_to_file(&config, &path);
        assert!(result.is_ok(), "Failed to render graph: {:?}", result.err());
        assert!(path.exists());
    }

    #[test]
    fn test_identical_values_render() {
        let graph = HistogramGraph::from_values(&[2.0, 2.0], 5).unwrap();
        assert_eq!(graph.histogram().max_count(), 2);

        let mut config = HistogramGraph::config("Flat", "x", "y");
        config.width = 320;
        config.height = 240;
        assert!(!graph.render_to_bytes(&config).unwrap().is_empty());
    }
}
