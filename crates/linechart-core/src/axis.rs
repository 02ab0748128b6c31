// File: crates/linechart-core/src/axis.rs
// Summary: Per-axis presentation settings (line color, title label, gridlines).

/// Presentation settings for one axis.
///
/// Which gridlines `grid` turns on depends on [`crate::GridWiring`].
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub color: Option<String>,
    pub label: Option<String>,
    pub grid: bool,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self { color: None, label: None, grid: true }
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::new() }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Stroke used for the axis baseline.
    pub fn stroke(&self) -> &str {
        self.color.as_deref().unwrap_or("black")
    }

    /// Label text, treating an empty string as no label.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}

impl Default for AxisConfig {
    fn default() -> Self { Self::new() }
}
