// File: crates/linechart-core/src/error.rs
// Summary: Error type shared by domain validation and SVG rendering.

use thiserror::Error;

/// Which axis a domain belongs to, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl std::fmt::Display for AxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid {axis} domain: {reason}")]
    InvalidDomain { axis: AxisId, reason: String },

    #[error("invalid chart dimensions {width}x{height}: both must be finite and positive")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("series {series} has a non-finite point at index {index}")]
    NonFinitePoint { series: usize, index: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
