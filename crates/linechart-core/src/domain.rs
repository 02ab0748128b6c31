// File: crates/linechart-core/src/domain.rs
// Summary: Axis domain inference: rounded, grid-aligned {min, max, step} ranges from raw values.

use crate::error::{AxisId, ChartError, Result};

/// Relative slack used when counting whole steps in a span computed with floats.
const STEP_EPSILON: f64 = 1e-9;

/// Most steps a renderable domain may span.
pub const MAX_STEPS: usize = 10_000;

/// Rounded axis range with its tick spacing.
///
/// `min` and `max` are multiples of `step` and bracket every observed value.
/// `diff`, `num_steps`, `optimal_steps` and `exact_step` describe how the step
/// was chosen; `exponent` also drives tick label precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Raw data span (`max - min` before expansion).
    pub diff: f64,
    /// Raw span measured in power-of-ten steps.
    pub num_steps: f64,
    pub optimal_steps: f64,
    pub exact_step: f64,
    /// Power of ten the step was snapped to.
    pub exponent: i32,
}

impl Domain {
    /// Domain used when an axis has no values at all: `[0, 1]` with step 1.
    pub fn unit() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 1.0,
            diff: 0.0,
            num_steps: 0.0,
            optimal_steps: 1.0,
            exact_step: 0.0,
            exponent: 0,
        }
    }

    /// Whole number of steps between `min` and `max`, never less than one.
    pub fn steps(&self) -> usize {
        if !(self.step > 0.0) || !(self.max > self.min) {
            return 1;
        }
        let exact = (self.max - self.min) / self.step;
        let slack = (STEP_EPSILON * exact.abs().max(1.0)).min(0.5);
        ((exact - slack).ceil() as usize).max(1)
    }

    /// Tick values from `min` to `max` inclusive, rounded for display.
    ///
    /// Values are generated by index so float error never accumulates
    /// across a long axis.
    pub fn ticks(&self) -> Vec<f64> {
        (0..=self.steps())
            .map(|k| self.round_tick(self.min + k as f64 * self.step))
            .collect()
    }

    /// Round a tick value to the precision implied by `exponent`.
    ///
    /// Non-negative exponents keep one decimal place; negative exponents keep
    /// `|exponent|` places. Halves round toward positive infinity.
    pub fn round_tick(&self, value: f64) -> f64 {
        let places = if self.exponent >= 0 { 1 } else { -self.exponent };
        let factor = 10f64.powi(places);
        let rounded = round_half_up(value * factor) / factor;
        // collapse -0.0
        rounded + 0.0
    }

    /// Display text for a tick value.
    pub fn format_tick(&self, value: f64) -> String {
        crate::svg::fmt_num(self.round_tick(value))
    }

    /// Whether `value` lies within `[min, max]`; the domain's containment
    /// guarantee for every value it was computed from.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject domains that would break layout math or loop forever.
    ///
    /// Besides bad bounds this catches spans that overflow `f64` and spans
    /// of more than [`MAX_STEPS`] ticks.
    pub fn validate(&self, axis: AxisId) -> Result<()> {
        let reason = if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            Some(format!("non-finite bounds (min={}, max={}, step={})", self.min, self.max, self.step))
        } else if self.step <= 0.0 {
            Some(format!("step must be positive, got {}", self.step))
        } else if self.min > self.max {
            Some(format!("min {} is greater than max {}", self.min, self.max))
        } else if !((self.max - self.min) / self.step).is_finite() {
            Some(format!("span from {} to {} overflows", self.min, self.max))
        } else if self.steps() > MAX_STEPS {
            Some(format!("{} steps of {} exceed the limit of {MAX_STEPS}", self.steps(), self.step))
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ChartError::InvalidDomain { axis, reason }),
            None => Ok(()),
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Mathematical modulo: the result always lies in `[0, modulus)`.
#[inline]
pub fn true_mod(value: f64, modulus: f64) -> f64 {
    ((value % modulus) + modulus) % modulus
}

/// Number of ticks that reads well across `pixel_extent` pixels.
///
/// Grows with the square root of the extent so long axes get more ticks,
/// but not proportionally more.
#[inline]
pub fn optimal_steps(pixel_extent: f64) -> f64 {
    (pixel_extent.max(0.0).sqrt() / 2.5).ceil().max(1.0)
}

/// Infer a rounded, grid-aligned domain covering `values` for an axis
/// `pixel_extent` pixels long.
///
/// Non-finite values are ignored. With no usable values the result is
/// [`Domain::unit`]; when every value is equal the step falls back to 1.
pub fn compute_domain(values: &[f64], pixel_extent: f64) -> Domain {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let optimal = optimal_steps(pixel_extent);
    if lo > hi {
        return Domain { optimal_steps: optimal, ..Domain::unit() };
    }

    let diff = hi - lo;
    if !diff.is_finite() {
        tracing::warn!(min = lo, max = hi, "value span overflows; domain will not validate");
    }
    let exact_step = diff / optimal;

    let (step, exponent, num_steps) = snap_step(diff, exact_step, optimal).unwrap_or((1.0, 0, diff));

    let min = lo - true_mod(lo, step);
    let max = hi + (step - true_mod(hi, step));

    let domain = Domain {
        min,
        max,
        step,
        diff,
        num_steps,
        optimal_steps: optimal,
        exact_step,
        exponent,
    };
    tracing::debug!(
        min = domain.min,
        max = domain.max,
        step = domain.step,
        exponent = domain.exponent,
        optimal_steps = optimal,
        "computed domain"
    );
    domain
}

/// Snap `exact_step` to a power of ten, then scale it by the integer that
/// brings the step count closest to `optimal`. `None` for degenerate spans.
fn snap_step(diff: f64, exact_step: f64, optimal: f64) -> Option<(f64, i32, f64)> {
    if !(diff > 0.0) || !exact_step.is_finite() {
        return None;
    }
    let exponent = round_half_up(exact_step.log10()) as i32;
    let base = 10f64.powi(exponent);
    if !(base > 0.0) || !base.is_finite() {
        return None;
    }
    let num_steps = diff / base;
    // A span far smaller than the snapped step rounds the multiplier to zero.
    let multiplier = (num_steps / optimal).round().max(1.0);
    let step = base * multiplier;
    if step > 0.0 && step.is_finite() {
        Some((step, exponent, num_steps))
    } else {
        None
    }
}
