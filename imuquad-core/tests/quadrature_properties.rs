//! Property tests for the composite Simpson integrator
//!
//! Checks the algebraic laws of the integrator over generated inputs:
//! degraded-input policy, exactness for low-degree polynomials, and the
//! velocity/position derivation laws.

mod common;

use imuquad_core::{
    quadrature::{integrate, integrate_with, try_integrate},
    kinematics::{position_change, velocity_change},
    CountingSink, IntegrationError,
};
use proptest::prelude::*;

use common::{assert_close, eval_poly, poly_integral, SignalGenerator};

fn samples(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, min_len..max_len)
}

proptest! {
    #[test]
    fn short_buffers_integrate_to_zero(buf in samples(0, 3), dt in 0.0001f32..1.0) {
        let sink = CountingSink::new();
        prop_assert_eq!(integrate_with(&buf, dt, &sink), 0.0);
        prop_assert_eq!(sink.count(), 1);
        prop_assert_eq!(
            try_integrate(&buf, dt),
            Err(IntegrationError::InsufficientSamples { required: 3, available: buf.len() })
        );
    }

    #[test]
    fn three_samples_match_simpson(buf in samples(3, 4), dt in 0.0001f32..1.0) {
        let expected = (buf[0] + 4.0 * buf[1] + buf[2]) * dt / 3.0;
        prop_assert_eq!(integrate(&buf, dt), expected);
    }

    #[test]
    fn constant_signal_is_exact(c in -50.0f32..50.0, n in 3usize..200, dt in 0.0001f32..0.1) {
        let buf = SignalGenerator::new(0).constant(c, n);
        let expected = c * (n - 1) as f32 * dt;
        prop_assert!(common::approx_eq(integrate(&buf, dt), expected, 1e-4));
    }

    #[test]
    fn linear_ramp_is_exact(
        a in -10.0f32..10.0,
        b in -10.0f32..10.0,
        n in 3usize..200,
        dt in 0.001f32..0.1
    ) {
        let buf = SignalGenerator::new(0).ramp(a, b, n, dt);
        let t_end = (n - 1) as f32 * dt;
        let expected = a * t_end + b * t_end * t_end / 2.0;
        prop_assert!(common::approx_eq(integrate(&buf, dt), expected, 1e-3));
    }

    #[test]
    fn velocity_delegates_to_integral(buf in samples(0, 64), dt in -1.0f32..1.0) {
        prop_assert_eq!(
            velocity_change(&buf, dt).to_bits(),
            integrate(&buf, dt).to_bits()
        );
    }

    #[test]
    fn position_scales_integral(buf in samples(0, 64), dt in -1.0f32..1.0) {
        let expected = integrate(&buf, dt) * dt * buf.len() as f32;
        prop_assert_eq!(position_change(&buf, dt).to_bits(), expected.to_bits());
    }

    #[test]
    fn negating_dt_negates_result(buf in samples(3, 64), dt in 0.0001f32..1.0) {
        prop_assert_eq!(integrate(&buf, -dt), -integrate(&buf, dt));
    }

    #[test]
    fn deterministic(buf in samples(0, 64), dt in 0.0001f32..1.0) {
        prop_assert_eq!(integrate(&buf, dt).to_bits(), integrate(&buf, dt).to_bits());
    }
}

#[test]
fn known_ramp_scenarios() {
    assert_eq!(integrate(&[0.0, 1.0, 2.0, 3.0, 4.0], 1.0), 8.0);
    assert_eq!(integrate(&[0.0, 1.0, 2.0, 3.0], 1.0), 4.5);

    let sink = CountingSink::new();
    assert_eq!(integrate_with(&[5.0], 0.1, &sink), 0.0);
    assert_eq!(sink.count(), 1);
}

#[test]
fn quadratic_and_cubic_odd_count_are_exact() {
    let generator = SignalGenerator::new(0);
    let dt = 0.01;
    let n = 101; // 100 intervals, all Simpson
    let t_end = (n - 1) as f64 * dt;

    for coeffs in [&[0.0, 0.0, 1.0][..], &[1.0, -2.0, 0.5, 3.0][..]] {
        let buf = generator.polynomial(coeffs, n, dt);
        let expected = poly_integral(coeffs, t_end) as f32;
        assert_close(integrate(&buf, dt as f32), expected, 1e-5);
    }
}

#[test]
fn quadratic_even_count_error_is_bounded() {
    let generator = SignalGenerator::new(0);
    let dt = 0.01;
    let n = 100; // 98 intervals of Simpson, one trapezoid
    let t_end = (n - 1) as f64 * dt;

    let coeffs = [0.0, 0.0, 3.0];
    let buf = generator.polynomial(&coeffs, n, dt);
    let exact = poly_integral(&coeffs, t_end) as f32;

    // Trapezoid error on one interval: |f''| · dt³ / 12
    let tail_bound = (6.0 * dt.powi(3) / 12.0) as f32;
    let error = (integrate(&buf, dt as f32) - exact).abs();
    assert!(error <= tail_bound + 1e-4, "error {} exceeds bound", error);
}

#[test]
fn sine_half_period() {
    let n = 101;
    let dt = core::f64::consts::PI / (n - 1) as f64;
    let buf: Vec<f32> = (0..n).map(|i| (i as f64 * dt).sin() as f32).collect();
    assert_close(integrate(&buf, dt as f32), 2.0, 1e-5);

    // Sanity check of the helper
    assert_eq!(eval_poly(&[1.0, 2.0, 3.0], 2.0), 17.0);
}
