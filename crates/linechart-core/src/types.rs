// File: crates/linechart-core/src/types.rs
// Summary: Shared layout constants (gutters, text block sizes, font sizes).

/// Outer margin on every side of the canvas, in pixels.
pub const MARGIN: f64 = 20.0;
/// Space left of the plot for y tick labels.
pub const Y_AXIS_GUTTER: f64 = 50.0;
/// Space below the plot for x tick labels.
pub const X_AXIS_GUTTER: f64 = 25.0;
pub const TITLE_HEIGHT: f64 = 40.0;
pub const X_LABEL_HEIGHT: f64 = 30.0;
pub const Y_LABEL_WIDTH: f64 = 40.0;
pub const LEGEND_WIDTH: f64 = 150.0;

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_SIZE: i32 = 24;
pub const TICK_FONT_SIZE: i32 = 14;
pub const AXIS_LABEL_FONT_SIZE: i32 = 16;
pub const LEGEND_FONT_SIZE: i32 = 14;

/// Legend swatch edge length.
pub const SWATCH_SIZE: f64 = 20.0;

/// Fixed block sizes that surround the plot area.
///
/// Optional blocks (title, axis labels, legend) only take space when the
/// chart actually has that element.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub margin: f64,
    pub y_axis_gutter: f64,
    pub x_axis_gutter: f64,
    pub title_height: f64,
    pub x_label_height: f64,
    pub y_label_width: f64,
    pub legend_width: f64,
}

impl LayoutMetrics {
    pub const fn new() -> Self {
        Self {
            margin: MARGIN,
            y_axis_gutter: Y_AXIS_GUTTER,
            x_axis_gutter: X_AXIS_GUTTER,
            title_height: TITLE_HEIGHT,
            x_label_height: X_LABEL_HEIGHT,
            y_label_width: Y_LABEL_WIDTH,
            legend_width: LEGEND_WIDTH,
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self { Self::new() }
}
