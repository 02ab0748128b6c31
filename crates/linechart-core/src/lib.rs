// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports domain inference and SVG line chart rendering.

pub mod axis;
pub mod chart;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod render;
pub mod scale;
pub mod series;
pub mod svg;
pub mod types;

pub use axis::AxisConfig;
pub use chart::{ChartConfig, ChartKind, GridWiring, RenderOptions};
pub use domain::{compute_domain, Domain};
pub use error::{AxisId, ChartError, Result};
pub use layout::Layout;
pub use palette::{ColorPair, Palette};
pub use render::{render, render_document, render_with};
pub use scale::{AxisScale, PlotScale};
pub use series::Series;
pub use types::LayoutMetrics;
