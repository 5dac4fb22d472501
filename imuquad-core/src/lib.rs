//! Core integration engine for imuquad
//!
//! Turns a window of uniformly sampled accelerometer readings into a
//! velocity change or position change using composite Simpson quadrature
//! with a trapezoidal tail. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - Runs without a heap (`no_std`, `heapless` windows)
//! - No allocation and no panics in the integration path
//! - Degraded input is reported through an injected sink, never printed
//!
//! ```no_run
//! use imuquad_core::{Integrator, IntegratorConfig};
//!
//! let integrator = Integrator::new(IntegratorConfig::from_rate_hz(100.0));
//! let accel = [0.0, 0.98, 1.96, 0.98, 0.0];
//!
//! match integrator.try_velocity_change(&accel) {
//!     Ok(dv) => {}, // m/s gained over the window
//!     Err(e) => {}, // Window too short
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod integrator;
pub mod kinematics;
pub mod quadrature;
pub mod traits;
pub mod window;

// Public API
pub use config::IntegratorConfig;
pub use diagnostics::{CountingSink, LogSink, SilentSink};
pub use errors::{IntegrationError, IntegrationResult};
pub use integrator::Integrator;
pub use kinematics::{
    position_change, position_change_with, try_position_change,
    try_velocity_change, velocity_change, velocity_change_with,
};
pub use quadrature::{integrate, integrate_with, try_integrate};
pub use traits::DiagnosticSink;
pub use window::SampleWindow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
