// File: crates/linechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::svg::fmt_num;

/// A point in output (SVG) space: x grows right, y grows down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// `x,y` pair as used in path data and polygon point lists.
    pub fn to_pair(&self) -> String {
        format!("{},{}", fmt_num(self.x), fmt_num(self.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center_x(&self) -> f64 { self.left + self.width() / 2.0 }
}
