//! Velocity and position from acceleration samples
//!
//! Both derivations are wrappers around [`quadrature`](crate::quadrature):
//!
//! | Operation          | Result                                   |
//! |--------------------|------------------------------------------|
//! | `velocity_change`  | `∫a dt`                                  |
//! | `position_change`  | `∫a dt · dt · n`  (n = number of samples) |
//!
//! ## Position Scaling
//!
//! `position_change` does not integrate a velocity profile. It scales the
//! single net velocity change by `dt · n`. That is what downstream
//! consumers are calibrated against, so it is kept as is. For a constant
//! acceleration `a` over `n` samples it yields `a · (n-1) · n · dt²`, not
//! the kinematic `a · ((n-1)·dt)² / 2`.

use crate::{
    diagnostics::LogSink,
    errors::IntegrationResult,
    quadrature,
    traits::DiagnosticSink,
};

/// Velocity change over the window, `∫a dt`
pub fn try_velocity_change(samples: &[f32], dt: f32) -> IntegrationResult<f32> {
    quadrature::try_integrate(samples, dt)
}

/// Velocity change, reporting a too-short window to `sink`
pub fn velocity_change_with<S: DiagnosticSink>(samples: &[f32], dt: f32, sink: &S) -> f32 {
    quadrature::integrate_with(samples, dt, sink)
}

/// Velocity change, logging a too-short window and returning `0.0`
pub fn velocity_change(samples: &[f32], dt: f32) -> f32 {
    velocity_change_with(samples, dt, &LogSink)
}

/// Position change over the window, `∫a dt · dt · n`
pub fn try_position_change(samples: &[f32], dt: f32) -> IntegrationResult<f32> {
    quadrature::try_integrate(samples, dt).map(|dv| scale_to_position(dv, samples.len(), dt))
}

/// Position change, reporting a too-short window to `sink`
pub fn position_change_with<S: DiagnosticSink>(samples: &[f32], dt: f32, sink: &S) -> f32 {
    let dv = quadrature::integrate_with(samples, dt, sink);
    scale_to_position(dv, samples.len(), dt)
}

/// Position change, logging a too-short window and returning `0.0`
pub fn position_change(samples: &[f32], dt: f32) -> f32 {
    position_change_with(samples, dt, &LogSink)
}

#[inline]
fn scale_to_position(integral: f32, count: usize, dt: f32) -> f32 {
    integral * dt * count as f32
}
