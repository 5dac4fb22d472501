//! Constants for imuquad Core
//!
//! Numeric values used by the integrator live here instead of as magic
//! numbers in the algorithms. Names carry their units.
//!
//! ## Organization
//!
//! - **Quadrature**: Simpson and trapezoid weights, minimum sample counts
//! - **Time**: Unit conversions and typical IMU sampling rates

/// Weights and sample-count limits of the composite Simpson rule.
pub mod quadrature;

/// Time unit conversions and default sampling rates.
pub mod time;

pub use quadrature::{
    MIN_SIMPSON_SAMPLES, SIMPSON_DIVISOR, SIMPSON_MIDPOINT_WEIGHT, TRAPEZOID_DIVISOR,
};

pub use time::{
    MS_PER_SECOND, DEFAULT_SAMPLE_RATE_HZ, DEFAULT_SAMPLE_INTERVAL_MS,
    LOW_RATE_SAMPLE_INTERVAL_MS, HIGH_RATE_SAMPLE_INTERVAL_MS,
};
