// File: crates/linechart-core/src/chart.rs
// Summary: Chart configuration, render options, and the high-level render entry points.

use crate::axis::AxisConfig;
use crate::domain::{compute_domain, Domain};
use crate::error::{ChartError, Result};
use crate::palette::Palette;
use crate::series::Series;
use crate::types::LayoutMetrics;

/// Chart types the renderer knows how to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Line,
}

/// Which axis setting switches which gridlines on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridWiring {
    /// Vertical gridlines follow `y_axis.grid`, horizontal ones `x_axis.grid`.
    /// This is the layout older charts were produced with.
    #[default]
    Crossed,
    /// Each axis's `grid` flag controls the gridlines at its own ticks:
    /// vertical lines follow `x_axis.grid`, horizontal ones `y_axis.grid`.
    PerAxis,
}

impl GridWiring {
    /// `(vertical, horizontal)` gridline switches for the given axes.
    pub fn flags(self, x_axis: &AxisConfig, y_axis: &AxisConfig) -> (bool, bool) {
        match self {
            GridWiring::Crossed => (y_axis.grid, x_axis.grid),
            GridWiring::PerAxis => (x_axis.grid, y_axis.grid),
        }
    }
}

/// Everything about a render that is not the chart data itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub palette: Palette,
    pub grid_wiring: GridWiring,
    pub metrics: LayoutMetrics,
}

/// A line chart: its plot size, series, axes, and optional title and legend.
///
/// `width` and `height` size the plot area only; the canvas adds margins,
/// gutters and the optional text blocks around it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub data: Vec<Series>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(600.0, 350.0)
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            title: None,
            kind: ChartKind::Line,
            width,
            height,
            data: Vec::new(),
            x_axis: AxisConfig::new(),
            y_axis: AxisConfig::new(),
            legend: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.data.push(series);
    }

    /// Title text, treating an empty string as no title.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_area(&self) -> bool {
        self.data.iter().any(|s| s.area)
    }

    /// Every x value across all series, in series order.
    pub fn x_values(&self) -> Vec<f64> {
        self.data.iter().flat_map(|s| s.xs()).collect()
    }

    /// Every y value across all series, in series order.
    pub fn y_values(&self) -> Vec<f64> {
        self.data.iter().flat_map(|s| s.ys()).collect()
    }

    /// Infer the x domain against the plot width and the y domain against
    /// the plot height.
    pub fn domains(&self) -> (Domain, Domain) {
        let x = compute_domain(&self.x_values(), self.width);
        let y = compute_domain(&self.y_values(), self.height);
        (x, y)
    }

    /// Reject sizes and points that would produce a corrupt document.
    pub fn validate(&self) -> Result<()> {
        let dims_ok = self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0;
        if !dims_ok {
            return Err(ChartError::InvalidDimensions { width: self.width, height: self.height });
        }
        for (series, s) in self.data.iter().enumerate() {
            if let Some(index) = s.first_non_finite() {
                return Err(ChartError::NonFinitePoint { series, index });
            }
        }
        Ok(())
    }

    /// Infer both domains and render with default options.
    pub fn render_svg(&self) -> Result<String> {
        self.render_svg_with(&RenderOptions::default())
    }

    /// Infer both domains and render with `opts`.
    pub fn render_svg_with(&self, opts: &RenderOptions) -> Result<String> {
        let (x, y) = self.domains();
        crate::render::render_with(self, &x, &y, opts)
    }
}
