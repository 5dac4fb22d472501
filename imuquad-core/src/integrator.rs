//! Configured integrator
//!
//! Bundles an [`IntegratorConfig`] with a [`DiagnosticSink`] so sensor loops
//! don't have to thread `dt` and a sink through every call.
//!
//! ```rust
//! use imuquad_core::{Integrator, IntegratorConfig, CountingSink};
//!
//! let integrator = Integrator::new(IntegratorConfig::from_rate_hz(100.0))
//!     .with_sink(CountingSink::new());
//!
//! let accel = [0.0_f32, 0.5, 1.0, 0.5, 0.0];
//! let dv = integrator.velocity_change(&accel);
//! assert!(dv > 0.0);
//!
//! // Too short: zero, and the sink knows why
//! assert_eq!(integrator.velocity_change(&accel[..2]), 0.0);
//! assert_eq!(integrator.sink().count(), 1);
//! ```

use crate::{
    config::IntegratorConfig,
    diagnostics::LogSink,
    errors::IntegrationResult,
    kinematics,
    quadrature,
    traits::DiagnosticSink,
};

/// Integrator with a fixed sampling period and diagnostic sink
#[derive(Debug, Clone, Default)]
pub struct Integrator<S: DiagnosticSink = LogSink> {
    config: IntegratorConfig,
    sink: S,
}

impl Integrator<LogSink> {
    /// Create an integrator that logs degraded input
    pub fn new(config: IntegratorConfig) -> Self {
        Self { config, sink: LogSink }
    }
}

impl<S: DiagnosticSink> Integrator<S> {
    /// Replace the diagnostic sink
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Integrator<T> {
        Integrator {
            config: self.config,
            sink,
        }
    }

    /// Sampling configuration
    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    /// Diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sampling period in seconds
    pub fn dt(&self) -> f32 {
        self.config.sample_period_s()
    }

    /// Integral of the window; `0.0` plus a notice if it is too short
    pub fn integrate(&self, samples: &[f32]) -> f32 {
        quadrature::integrate_with(samples, self.dt(), &self.sink)
    }

    /// Integral of the window, or why it can't be computed
    pub fn try_integrate(&self, samples: &[f32]) -> IntegrationResult<f32> {
        quadrature::try_integrate(samples, self.dt())
    }

    /// Velocity change over an acceleration window
    pub fn velocity_change(&self, samples: &[f32]) -> f32 {
        kinematics::velocity_change_with(samples, self.dt(), &self.sink)
    }

    /// Velocity change, or why it can't be computed
    pub fn try_velocity_change(&self, samples: &[f32]) -> IntegrationResult<f32> {
        kinematics::try_velocity_change(samples, self.dt())
    }

    /// Position change over an acceleration window
    pub fn position_change(&self, samples: &[f32]) -> f32 {
        kinematics::position_change_with(samples, self.dt(), &self.sink)
    }

    /// Position change, or why it can't be computed
    pub fn try_position_change(&self, samples: &[f32]) -> IntegrationResult<f32> {
        kinematics::try_position_change(samples, self.dt())
    }
}
