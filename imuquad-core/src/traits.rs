//! Core traits for the integrator
//!
//! Kept deliberately small: the integrator only needs somewhere to report
//! degraded input. Everything else is plain functions over slices.

use crate::errors::IntegrationError;

/// Receiver for degraded-input notices
///
/// The integrator never prints. When it has to fall back to a neutral value
/// it hands the error to a sink first, then returns. Implement this to route
/// notices into your own logger, health counters or a test probe.
pub trait DiagnosticSink {
    /// Report a degraded-input condition
    fn notice(&self, error: &IntegrationError);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn notice(&self, error: &IntegrationError) {
        (**self).notice(error)
    }
}
