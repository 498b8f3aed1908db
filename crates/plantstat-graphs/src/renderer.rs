//! Graph rendering trait and shared helpers

use crate::{ColorScheme, GraphConfig};
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use plantstat_common::{PlantStatError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::ops::Range;
use std::path::Path;

/// Trait for rendering graphs onto bitmap images
pub trait GraphRenderer {
    /// Short name used in log records.
    fn name(&self) -> &'static str;

    /// Draw the complete chart, background included, onto `root`.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static;

    /// Render the graph to an image file; the format follows the extension.
    ///
    /// The drawing area lives only for the duration of this call.
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        validate_dimensions(config)?;
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        self.draw(&root, config)?;
        root.present()?;

        tracing::info!(graph = self.name(), "Successfully rendered chart to {}", path.display());
        Ok(())
    }

    /// Render the graph to PNG encoded bytes.
    fn render_to_bytes(&self, config: &GraphConfig) -> Result<Vec<u8>> {
        validate_dimensions(config)?;
        let (width, height) = (config.width, config.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root, config)?;
            root.present()?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| PlantStatError::graph("pixel buffer does not match image size"))?;
        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut png, ImageOutputFormat::Png)
            .map_err(|err| PlantStatError::graph_with_source("Failed to encode PNG", err))?;

        tracing::debug!(graph = self.name(), bytes = png.get_ref().len(), "Rendered chart to memory");
        Ok(png.into_inner())
    }

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
                RGBColor(188, 189, 34),  // Olive
                RGBColor(23, 190, 207),  // Cyan
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Color at `index` of the configured scheme, wrapping around.
    fn series_color(&self, config: &GraphConfig, index: usize) -> RGBColor {
        let colors = self.get_colors(&config.style.color_scheme);
        if colors.is_empty() {
            return RGBColor(31, 119, 180);
        }
        colors[index % colors.len()]
    }

    /// Parse a color string (hex format) to `RGBColor`
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        tracing::warn!("Unparseable color '{}', using black", color_str);
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map_or(RGBColor(255, 255, 255), |color| self.parse_color(color))
    }

    /// Get grid line color from style config
    fn get_grid_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .grid
            .color
            .as_ref()
            .map_or(RGBColor(176, 176, 176), |color| self.parse_color(color))
    }
}

fn validate_dimensions(config: &GraphConfig) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(PlantStatError::config(format!(
            "image size must be positive, got {}x{}",
            config.width, config.height
        )));
    }
    Ok(())
}

/// Axis range covering `values` with 5% padding on both sides.
///
/// Empty input gives `0..1`; a single distinct value is widened by 0.5.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let span = max - min;
    if span == 0.0 {
        return (min - 0.5)..(max + 0.5);
    }

    let padding = span * 0.05;
    (min - padding)..(max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    struct MockRenderer;

    impl GraphRenderer for MockRenderer {
        fn name(&self) -> &'static str {
            "mock"
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
            Ok(())
        }
    }

    #[test]
    fn test_color_schemes() {
        let renderer = MockRenderer;

        let default_colors = renderer.get_colors(&ColorScheme::Default);
        assert_eq!(default_colors.len(), 10);
        assert_eq!(default_colors[0], RGBColor(31, 119, 180));

        let custom_scheme = ColorScheme::Custom(vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
            "#0000FF".to_string(),
        ]);
        let colors = renderer.get_colors(&custom_scheme);
        assert_eq!(colors, vec![RGBColor(255, 0, 0), RGBColor(0, 255, 0), RGBColor(0, 0, 255)]);
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#008000"), RGBColor(0, 128, 0));
        assert_eq!(renderer.parse_color("#b0b0b0"), RGBColor(176, 176, 176));

        // Invalid colors default to black
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ééé"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_series_color_wraps() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();
        config.style.color_scheme =
            ColorScheme::Custom(vec!["#FF0000".to_string(), "#000000".to_string()]);

        assert_eq!(renderer.series_color(&config, 0), RGBColor(255, 0, 0));
        assert_eq!(renderer.series_color(&config, 1), RGBColor(0, 0, 0));
        assert_eq!(renderer.series_color(&config, 2), RGBColor(255, 0, 0));

        config.style.color_scheme = ColorScheme::Custom(Vec::new());
        assert_eq!(renderer.series_color(&config, 0), RGBColor(31, 119, 180));
    }

    #[test]
    fn test_background_color() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();

        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 255, 255));

        config.style.background_color = Some("#FF0000".to_string());
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 0, 0));

        config.style.background_color = None;
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(Vec::new()), 0.0..1.0);
        assert_eq!(padded_range([4.0]), 3.5..4.5);

        let range = padded_range([10.0, 30.0, 20.0]);
        assert!((range.start - 9.0).abs() < 1e-12);
        assert!((range.end - 31.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_to_bytes_is_png() {
        let config = GraphConfig {
            width: 40,
            height: 30,
            ..GraphConfig::default()
        };
        let bytes = MockRenderer.render_to_bytes(&config).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = GraphConfig {
            width: 0,
            ..GraphConfig::default()
        };
        assert!(matches!(
            MockRenderer.render_to_bytes(&config),
            Err(PlantStatError::Config { .. })
        ));
    }
}
