// File: crates/linechart-core/src/scale.rs
// Summary: Data-to-pixel transforms for the X (rightward) and Y (inverted) axes.

use crate::domain::Domain;
use crate::layout::Layout;
use crate::geometry::Point;

/// Affine map between one axis domain and a pixel span.
///
/// `origin_px` is where `domain.min` lands. Pixels grow in the direction of
/// `sign`: +1 for x (rightward), -1 for y (output y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub origin_px: f64,
    pub length_px: f64,
    pub min: f64,
    pub step: f64,
    pub steps: f64,
    sign: f64,
}

impl AxisScale {
    pub fn horizontal(origin_px: f64, length_px: f64, domain: &Domain) -> Self {
        Self::with_sign(origin_px, length_px, domain, 1.0)
    }

    pub fn vertical(origin_px: f64, length_px: f64, domain: &Domain) -> Self {
        Self::with_sign(origin_px, length_px, domain, -1.0)
    }

    fn with_sign(origin_px: f64, length_px: f64, domain: &Domain, sign: f64) -> Self {
        Self {
            origin_px,
            length_px,
            min: domain.min,
            step: domain.step,
            steps: domain.steps() as f64,
            sign,
        }
    }

    /// Pixels covered by one unit of data.
    #[inline]
    pub fn px_per_unit(&self) -> f64 {
        self.length_px / self.steps / self.step
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.origin_px + self.sign * self.length_px * ((value - self.min) / self.steps) / self.step
    }

    /// Inverse of [`AxisScale::to_px`]: the data value drawn at `px`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.min + self.sign * (px - self.origin_px) / self.px_per_unit()
    }
}

/// The pair of axis scales for one rendered chart.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl PlotScale {
    pub fn new(layout: &Layout, x_domain: &Domain, y_domain: &Domain) -> Self {
        Self {
            x: AxisScale::horizontal(layout.origin.x, layout.chart_width, x_domain),
            y: AxisScale::vertical(layout.origin.y, layout.chart_height, y_domain),
        }
    }

    #[inline]
    pub fn to_screen(&self, (x, y): (f64, f64)) -> Point {
        Point::new(self.x.to_px(x), self.y.to_px(y))
    }

    /// Inverse of [`PlotScale::to_screen`], exact up to float rounding.
    #[inline]
    pub fn from_screen(&self, p: Point) -> (f64, f64) {
        (self.x.from_px(p.x), self.y.from_px(p.y))
    }
}
