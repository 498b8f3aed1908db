//! Scatter chart of paired measurements

use crate::{padded_range, GraphConfig, GraphRenderer, GraphType};
use plantstat_common::{validate_non_empty, PlantStatError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Scatter chart renderer: unconnected circle markers at `(x, y)`.
#[derive(Debug, Clone)]
pub struct ScatterGraph {
    points: Vec<(f64, f64)>,
    marker_size: i32,
}

impl ScatterGraph {
    /// Pairs `x[i]` with `y[i]`.
    ///
    /// Sequences of different lengths are an error; nothing is truncated.
    pub fn from_series(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PlantStatError::length_mismatch("x", x.len(), "y", y.len()));
        }
        validate_non_empty(x, "x")?;

        Ok(Self {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            marker_size: 5,
        })
    }

    /// Overrides the marker radius in pixels.
    #[must_use]
    pub fn with_marker_size(mut self, marker_size: i32) -> Self {
        self.marker_size = marker_size;
        self
    }

    /// The plotted points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Create a graph configuration with custom title and labels
    pub fn config(title: &str, x_label: &str, y_label: &str) -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Scatter,
            title: title.to_string(),
            x_label: Some(x_label.to_string()),
            y_label: Some(y_label.to_string()),
            ..Default::default()
        }
    }
}

impl GraphRenderer for ScatterGraph {
    fn name(&self) -> &'static str {
        "scatter"
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

        let x_range = padded_range(self.points.iter().map(|p| p.0));
        let y_range = padded_range(self.points.iter().map(|p| p.1));
        tracing::debug!(?x_range, ?y_range, points = self.points.len(), "scatter axes");

        let style = &config.style;
        let title_font = (style.title_font.family.as_str(), style.title_font.size);
        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, title_font)
            .margin_top(style.margins.top)
            .margin_right(style.margins.right)
            .x_label_area_size(style.margins.bottom)
            .y_label_area_size(style.margins.left)
            .build_cartesian_2d(x_range, y_range)?;

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

        let color = self.series_color(config, 0);
        chart.draw_series(
            self.points
                .iter()
                .map(|&point| Circle::new(point, self.marker_size, color.filled())),
        )?;

        Ok(())
    }
}
