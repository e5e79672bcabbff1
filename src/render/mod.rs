//! Chart and table rendering for a [`Summary`]
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, colors and labels
//! - `dom`: Facet-derived SVG element types
//! - `svg`: Bar chart layout and SVG generation
//! - `png`: Rasterization of the SVG chart
//! - `text`: Terminal table

pub mod defaults;
pub mod dom;
pub mod png;
pub mod svg;
pub mod text;

use std::fs;

use camino::Utf8Path;

use crate::errors::RenderError;
use crate::log::info;
use crate::summary::Summary;

pub use png::svg_to_png;
pub use svg::render_svg;
pub use text::render_table;

/// Labels and sizing of the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Minimum canvas width in pixels
    pub width: f64,
    /// Minimum canvas height in pixels; grows with the number of bars
    pub height: f64,
    pub bar_color: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            x_label: defaults::X_LABEL.to_string(),
            y_label: defaults::Y_LABEL.to_string(),
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            bar_color: defaults::BAR_COLOR.to_string(),
        }
    }
}

/// File format of the written chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// PNG for a `.png` path (any case), SVG otherwise.
    pub fn from_path(path: &Utf8Path) -> OutputFormat {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Svg,
        }
    }
}

/// Render the chart and write it to `path`, choosing the format from the
/// extension.
pub fn write_chart(
    summary: &Summary,
    options: &ChartOptions,
    path: &Utf8Path,
) -> Result<OutputFormat, RenderError> {
    let svg = render_svg(summary, options)?;
    let format = OutputFormat::from_path(path);
    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => svg_to_png(&svg, 1.0)?,
    };
    fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_string(),
        source,
    })?;
    info!(path = %path, ?format, "wrote chart");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Utf8Path::new("out.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Utf8Path::new("OUT.PNG")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Utf8Path::new("out.svg")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Utf8Path::new("chart")), OutputFormat::Svg);
    }
}
