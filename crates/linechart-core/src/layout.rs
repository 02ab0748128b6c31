// File: crates/linechart-core/src/layout.rs
// Summary: Pixel layout of the canvas: plot origin, optional text blocks, legend column, total size.

use crate::chart::ChartConfig;
use crate::geometry::{Point, Rect};
use crate::types::LayoutMetrics;

/// Resolved pixel layout for one chart.
///
/// Horizontally: margin, y label block, y gutter, plot, legend column, margin.
/// Vertically: margin, title block, plot, x gutter, x label block, margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub metrics: LayoutMetrics,
    pub title_height: f64,
    pub x_label_height: f64,
    pub y_label_width: f64,
    pub legend_width: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    /// Bottom-left corner of the plot, i.e. where `(x.min, y.min)` lands.
    pub origin: Point,
    pub total_width: f64,
    pub total_height: f64,
}

impl Layout {
    pub fn compute(config: &ChartConfig, metrics: &LayoutMetrics) -> Self {
        let m = *metrics;
        let title_height = if config.title_text().is_some() { m.title_height } else { 0.0 };
        let x_label_height = if config.x_axis.label_text().is_some() { m.x_label_height } else { 0.0 };
        let y_label_width = if config.y_axis.label_text().is_some() { m.y_label_width } else { 0.0 };
        let legend_width = if config.legend { m.legend_width } else { 0.0 };

        let chart_width = config.width;
        let chart_height = config.height;

        let total_width = m.margin + m.y_axis_gutter + y_label_width + chart_width + legend_width + m.margin;
        let total_height = m.margin + title_height + chart_height + m.x_axis_gutter + x_label_height + m.margin;
        let origin = Point::new(
            m.margin + y_label_width + m.y_axis_gutter,
            m.margin + title_height + chart_height,
        );

        let layout = Self {
            metrics: m,
            title_height,
            x_label_height,
            y_label_width,
            legend_width,
            chart_width,
            chart_height,
            origin,
            total_width,
            total_height,
        };
        tracing::debug!(
            origin_x = origin.x,
            origin_y = origin.y,
            total_width,
            total_height,
            "computed layout"
        );
        layout
    }

    /// The plotted area in output coordinates.
    pub fn plot(&self) -> Rect {
        Rect::from_ltwh(
            self.origin.x,
            self.origin.y - self.chart_height,
            self.chart_width,
            self.chart_height,
        )
    }

    pub fn title_anchor(&self) -> Point {
        Point::new(
            self.plot().center_x(),
            self.metrics.margin + self.title_height * 3.0 / 4.0,
        )
    }

    /// Baseline for x tick labels, inside the x gutter.
    pub fn x_tick_label_y(&self) -> f64 {
        self.origin.y + self.metrics.x_axis_gutter * 3.0 / 4.0
    }

    /// Center line for y tick labels, in the middle of the y gutter.
    pub fn y_tick_label_x(&self) -> f64 {
        self.metrics.margin + self.y_label_width + self.metrics.y_axis_gutter / 2.0
    }

    pub fn x_label_anchor(&self) -> Point {
        Point::new(
            self.plot().center_x(),
            self.origin.y + self.metrics.x_axis_gutter + self.x_label_height * 3.0 / 4.0,
        )
    }

    pub fn y_label_anchor(&self) -> Point {
        Point::new(
            self.metrics.margin + self.y_label_width * 3.0 / 4.0,
            self.metrics.margin + self.title_height + self.chart_height / 2.0,
        )
    }

    /// Top-left corner of the legend column.
    pub fn legend_origin(&self) -> Point {
        Point::new(self.origin.x + self.chart_width, self.metrics.margin + self.title_height)
    }
}
