// File: crates/linechart-core/tests/autoscale.rs
// Purpose: Validate domain inference on known inputs, degenerate inputs, and tick formatting.

use linechart_core::domain::{true_mod, MAX_STEPS};
use linechart_core::{compute_domain, AxisId, ChartConfig, ChartError, Domain, Series};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn mixed_sign_range_aligns_on_both_sides_of_zero() {
    for extent in [350.0, 600.0] {
        let d = compute_domain(&[-45.0, 12.0, 47.0], extent);
        assert_eq!(d.step, 10.0);
        assert_eq!(d.exponent, 1);
        assert_eq!(d.min, -50.0);
        assert_eq!(d.max, 50.0);
        assert_eq!(true_mod(d.min, d.step), 0.0);
        assert_eq!(true_mod(d.max, d.step), 0.0);
        assert_eq!(d.steps(), 10);
    }
}

#[test]
fn multiplier_scales_power_of_ten_step() {
    // 20 units over 10 optimal steps: power-of-ten step 1, doubled to 2.
    let d = compute_domain(&[0.0, 10.0, 20.0], 600.0);
    assert_eq!(d.optimal_steps, 10.0);
    assert_eq!(d.exponent, 0);
    assert_eq!(d.step, 2.0);
    assert_eq!(d.min, 0.0);
    // A max already on a boundary is pushed out by one step.
    assert_eq!(d.max, 22.0);
    assert_eq!(d.steps(), 11);
}

#[test]
fn fractional_range() {
    let d = compute_domain(&[1.0, 2.0, 1.5, 0.5, 1.5, 1.0], 350.0);
    assert_eq!(d.optimal_steps, 8.0);
    assert_eq!(d.exponent, -1);
    assert!(approx(d.step, 0.2), "step {}", d.step);
    assert!(approx(d.min, 0.4), "min {}", d.min);
    assert!(approx(d.max, 2.0), "max {}", d.max);
    assert!(d.min <= 0.5 && d.max >= 2.0);
    assert_eq!(d.steps(), 8);

    let labels: Vec<String> = d.ticks().iter().map(|v| d.format_tick(*v)).collect();
    assert_eq!(labels, ["0.4", "0.6", "0.8", "1", "1.2", "1.4", "1.6", "1.8", "2"]);
}

#[test]
fn zero_multiplier_is_clamped_to_one() {
    // exact step 0.4 snaps up to 1, which only fits 3.2 times in 8 optimal steps.
    let d = compute_domain(&[0.0, 3.2], 350.0);
    assert_eq!(d.step, 1.0);
    assert_eq!(d.min, 0.0);
    assert!(approx(d.max, 4.0), "max {}", d.max);
}

#[test]
fn identical_values_fall_back_to_unit_step() {
    let d = compute_domain(&[5.0, 5.0, 5.0], 350.0);
    assert_eq!(d.step, 1.0);
    assert_eq!(d.exponent, 0);
    assert_eq!(d.diff, 0.0);
    assert_eq!(d.min, 5.0);
    assert_eq!(d.max, 6.0);
    assert_eq!(d.steps(), 1);
}

#[test]
fn empty_values_give_unit_domain() {
    let d = compute_domain(&[], 600.0);
    assert_eq!((d.min, d.max, d.step), (0.0, 1.0, 1.0));
    assert_eq!(d.optimal_steps, 10.0);
    assert!(d.step > 0.0);
}

#[test]
fn non_finite_values_are_ignored() {
    let d = compute_domain(&[f64::NAN, -45.0, f64::INFINITY, 47.0], 350.0);
    assert_eq!((d.min, d.max, d.step), (-50.0, 50.0, 10.0));
}

#[test]
fn tick_labels_follow_exponent_precision() {
    let unit = Domain::unit();
    assert_eq!(unit.format_tick(2.25), "2.3");
    assert_eq!(unit.format_tick(40.0), "40");
    assert_eq!(unit.format_tick(-0.04), "0");

    let hundredths = Domain { exponent: -2, ..Domain::unit() };
    assert_eq!(hundredths.format_tick(0.123), "0.12");
    assert_eq!(hundredths.format_tick(0.30000000000000004), "0.3");
}

#[test]
fn ticks_include_both_bounds() {
    let d = compute_domain(&[-45.0, 47.0], 350.0);
    let ticks = d.ticks();
    assert_eq!(ticks.len(), d.steps() + 1);
    assert_eq!(ticks.first().copied(), Some(-50.0));
    assert_eq!(ticks.last().copied(), Some(50.0));
    assert!(ticks.contains(&0.0));
    assert!(d.contains(-45.0) && d.contains(47.0));
    assert!(!d.contains(50.5));
}

#[test]
fn chart_domains_pluck_every_series() {
    let mut chart = ChartConfig::new(600.0, 350.0);
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (10.0, 2.0), (20.0, 1.5)]));
    chart.add_series(Series::with_data("b", vec![(0.0, 0.5), (10.0, 1.5), (20.0, 1.0)]));

    let (x, y) = chart.domains();
    assert_eq!((x.min, x.max, x.step), (0.0, 22.0, 2.0));
    assert!(y.min <= 0.5 && y.max >= 2.0);
    assert_eq!(chart.x_values().len(), 6);
}

#[test]
fn overflowing_span_is_rejected() {
    let d = compute_domain(&[-1e308, 1e308], 350.0);
    assert!(d.min.is_finite() && d.max.is_finite());
    match d.validate(AxisId::Y) {
        Err(ChartError::InvalidDomain { axis, reason }) => {
            assert_eq!(axis, AxisId::Y);
            assert!(reason.contains("overflows"), "{reason}");
        }
        other => panic!("expected overflow rejection, got {other:?}"),
    }

    let mut chart = ChartConfig::new(600.0, 350.0);
    chart.add_series(Series::with_data("huge", vec![(0.0, -1e308), (1.0, 1e308)]));
    assert!(matches!(chart.render_svg(), Err(ChartError::InvalidDomain { axis: AxisId::Y, .. })));
}

#[test]
fn step_count_is_exact_for_long_spans() {
    let d = Domain { min: 0.0, max: 1e10, step: 1.0, ..Domain::unit() };
    assert_eq!(d.steps(), 10_000_000_000);
}

#[test]
fn too_many_steps_are_rejected() {
    let at_limit = Domain { min: 0.0, max: MAX_STEPS as f64, step: 1.0, ..Domain::unit() };
    assert_eq!(at_limit.steps(), MAX_STEPS);
    assert_eq!(at_limit.validate(AxisId::X), Ok(()));

    let over = Domain { max: MAX_STEPS as f64 + 1.0, ..at_limit };
    assert!(matches!(over.validate(AxisId::X), Err(ChartError::InvalidDomain { axis: AxisId::X, .. })));

    let runaway = Domain { max: 1e10, ..at_limit };
    assert!(runaway.validate(AxisId::X).is_err());
}
