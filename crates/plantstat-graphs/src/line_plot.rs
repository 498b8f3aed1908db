//! Line chart of a measurement over synthetic week labels

use crate::{padded_range, GraphConfig, GraphRenderer, GraphType};
use plantstat_common::{validate_non_empty, week_labels, PlantStatError, Result, WeekLabel};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Connected line with circle markers, one point per week.
#[derive(Debug, Clone)]
pub struct LinePlotGraph {
    values: Vec<f64>,
    labels: Vec<WeekLabel>,
}

impl LinePlotGraph {
    /// Places `values[i]` at the label `Week-(i+1)`.
    pub fn from_series(values: &[f64]) -> Result<Self> {
        validate_non_empty(values, "values")?;
        Ok(Self {
            values: values.to_vec(),
            labels: week_labels(values.len()),
        })
    }

    /// X axis labels, in plotting order.
    pub fn labels(&self) -> &[WeekLabel] {
        &self.labels
    }

    /// Plotted values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Create a graph configuration with custom title and labels
    pub fn config(title: &str, x_label: &str, y_label: &str) -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Line,
            title: title.to_string(),
            x_label: Some(x_label.to_string()),
            y_label: Some(y_label.to_string()),
            ..Default::default()
        }
    }

    fn label_at(&self, index: i32) -> String {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .map_or_else(String::new, ToString::to_string)
    }

    fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        (0i32..).zip(self.values.iter().copied())
    }
}

impl GraphRenderer for LinePlotGraph {
    fn name(&self) -> &'static str {
        "line_plot"
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

        let count = i32::try_from(self.values.len())
            .map_err(|_| PlantStatError::graph("too many points for a line plot"))?;
        let y_range = padded_range(self.values.iter().copied());

        // One empty slot on each side keeps the end markers off the frame
        let style = &config.style;
        let title_font = (style.title_font.family.as_str(), style.title_font.size);
        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, title_font)
            .margin_top(style.margins.top)
            .margin_right(style.margins.right)
            .x_label_area_size(style.margins.bottom)
            .y_label_area_size(style.margins.left)
            .build_cartesian_2d(-1i32..count, y_range)?;

        let grid_color = self.get_grid_color(config);
        let format_week = |x: &i32| self.label_at(*x);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .x_labels(self.values.len() + 2)
            .x_label_formatter(&format_week)
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
        chart.draw_series(LineSeries::new(self.points(), color.stroke_width(2)))?;
        chart.draw_series(self.points().map(|point| Circle::new(point, 4, color.filled())))?;

        tracing::debug!(points = self.values.len(), "line plot drawn");
        Ok(())
    }
}
