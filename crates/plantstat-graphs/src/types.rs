//! Graph types and data structures

use serde::{Deserialize, Serialize};

/// Supported graph types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphType {
    /// Height against leaf count
    Scatter,
    /// Dry weight distribution
    Histogram,
    /// Height over week labels
    Line,
}

impl GraphType {
    /// Every graph type, in generation order.
    pub const ALL: [Self; 3] = [Self::Scatter, Self::Histogram, Self::Line];

    /// Suffix appended to the plant name in the output file name.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Histogram => "histogram",
            Self::Line => "line_plot",
        }
    }

    /// Output file name for `plant`, e.g. `Tomato_line_plot.png`.
    pub fn file_name(self, plant: &str) -> String {
        format!("{plant}_{}.png", self.file_suffix())
    }
}

/// Graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Kind of chart this configuration describes
    pub graph_type: GraphType,
    /// Caption drawn above the chart
    pub title: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// X axis description
    pub x_label: Option<String>,
    /// Y axis description
    pub y_label: Option<String>,
    /// Colors, fonts, margins and grid
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_type: GraphType::Line,
            title: "Graph".to_string(),
            // 10 x 6 inches at 100 dpi
            width: 1000,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Ten-color categorical palette
    Default,
    /// Hex colors (`#RRGGBB`) in order of use
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Space above the plotting area
    pub top: u32,
    /// Space right of the plotting area
    pub right: u32,
    /// Height of the x label area
    pub bottom: u32,
    /// Width of the y label area
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 30,
            bottom: 60,
            left: 70,
        }
    }
}

/// Grid line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Draw vertical grid lines
    pub show_x: bool,
    /// Draw horizontal grid lines
    pub show_y: bool,
    /// Hex color of the grid lines
    pub color: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: true,
            color: Some("#b0b0b0".to_string()),
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Series colors
    pub color_scheme: ColorScheme,
    /// Hex background color, white when unset
    pub background_color: Option<String>,
    /// Caption font
    pub title_font: FontConfig,
    /// Axis description font
    pub axis_font: FontConfig,
    /// Tick label font
    pub label_font: FontConfig,
    /// Margins and label areas
    pub margins: MarginConfig,
    /// Grid lines
    pub grid: GridConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 24,
            },
            axis_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 18,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            grid: GridConfig::default(),
        }
    }
}
