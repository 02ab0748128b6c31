// File: crates/linechart-core/src/grid.rs
// Summary: Tick layout: positioned, labeled graduations along one axis.

use crate::domain::Domain;
use crate::scale::AxisScale;

/// One graduation along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Pixel position along the axis direction.
    pub px: f64,
    /// Strictly between the domain bounds; only interior ticks get gridlines.
    pub interior: bool,
}

/// Ticks from `domain.min` to `domain.max`, positioned with `scale`.
pub fn axis_ticks(domain: &Domain, scale: &AxisScale) -> Vec<Tick> {
    let values = domain.ticks();
    let last = values.len().saturating_sub(1);
    values
        .into_iter()
        .enumerate()
        .map(|(k, value)| Tick {
            value,
            label: domain.format_tick(value),
            px: scale.to_px(value),
            interior: k > 0 && k < last,
        })
        .collect()
}
