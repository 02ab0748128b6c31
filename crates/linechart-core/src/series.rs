// File: crates/linechart-core/src/series.rs
// Summary: Series model: a labeled, colored polyline with an optional filled area.

/// One plotted line.
///
/// Points are drawn in the order given; sort by x first for a left-to-right path.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Palette color name; unknown or missing names fall back by series index.
    pub color: Option<String>,
    pub label: String,
    /// Fill the region between the line and the x-axis baseline.
    pub area: bool,
    pub values: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { color: None, label: label.into(), area: false, values: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, values: Vec<(f64, f64)>) -> Self {
        Self { values, ..Self::new(label) }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.values.push((x, y));
    }

    /// Sort points by ascending x, keeping the order of equal x values.
    pub fn sort_by_x(&mut self) {
        self.values.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|p| p.0)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|p| p.1)
    }

    /// Index of the first NaN or infinite coordinate, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|&(x, y)| !x.is_finite() || !y.is_finite())
    }
}
