//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic acceleration signal generators (ramps, polynomials, noise)
//! - Closed-form integrals to compare against
//! - Tolerance helpers for float assertions

#![allow(dead_code)]

/// Standard gravity, m/s²
pub const G: f32 = 9.80665;

/// Deterministic signal generator
///
/// Uses a linear congruential generator so every run sees the same noise.
pub struct SignalGenerator {
    seed: u32,
}

impl SignalGenerator {
    /// Create generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Constant acceleration `c` over `count` samples
    pub fn constant(&self, c: f32, count: usize) -> Vec<f32> {
        vec![c; count]
    }

    /// Linear ramp `a + b·t` sampled every `dt`
    pub fn ramp(&self, a: f32, b: f32, count: usize, dt: f32) -> Vec<f32> {
        (0..count).map(|i| a + b * (i as f32 * dt)).collect()
    }

    /// Polynomial with coefficients `coeffs[k]·t^k` sampled every `dt`
    pub fn polynomial(&self, coeffs: &[f64], count: usize, dt: f64) -> Vec<f32> {
        (0..count)
            .map(|i| eval_poly(coeffs, i as f64 * dt) as f32)
            .collect()
    }

    /// Constant acceleration with uniform noise of amplitude `noise`
    pub fn noisy_constant(&mut self, c: f32, noise: f32, count: usize) -> Vec<f32> {
        (0..count).map(|_| c + self.random_noise(noise)).collect()
    }

    /// Acceleration pulse: rest, push at `peak`, rest
    ///
    /// Shaped like a stop-and-go movement on a single axis.
    pub fn pulse(&self, peak: f32, rest: usize, push: usize) -> Vec<f32> {
        let mut samples = vec![0.0; rest];
        samples.extend(std::iter::repeat(peak).take(push));
        samples.extend(std::iter::repeat(0.0).take(rest));
        samples
    }

    fn random_noise(&mut self, amplitude: f32) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// Evaluate `Σ coeffs[k]·t^k`
pub fn eval_poly(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Exact `∫₀ᵀ Σ coeffs[k]·t^k dt`
pub fn poly_integral(coeffs: &[f64], t_end: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| c * t_end.powi(k as i32 + 1) / (k as f64 + 1.0))
        .sum()
}

/// Relative-or-absolute closeness for f32 results
pub fn approx_eq(actual: f32, expected: f32, rel: f32) -> bool {
    let scale = expected.abs().max(1.0);
    (actual - expected).abs() <= rel * scale
}

/// Assert closeness with a readable failure message
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, rel: f32) {
    assert!(
        approx_eq(actual, expected, rel),
        "expected {} ≈ {} (rel {})",
        actual,
        expected,
        rel
    );
}
