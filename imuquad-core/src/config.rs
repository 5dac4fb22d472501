//! Integrator configuration
//!
//! The only thing the integrator needs to know about the sensor is its
//! sampling period. It can be given directly in seconds, as an output data
//! rate, or as a sampling interval from a timer:
//!
//! ```rust
//! use imuquad_core::IntegratorConfig;
//!
//! let from_rate = IntegratorConfig::from_rate_hz(200.0);
//! let from_timer = IntegratorConfig::from_interval_ms(5);
//! assert_eq!(from_rate.sample_period_s(), from_timer.sample_period_s());
//! ```
//!
//! With the `serde` feature the config can be loaded from the host
//! application's settings file.
//!
//! The period is not validated. A zero period makes every integral zero, a
//! negative one flips its sign.

use crate::constants::time::{
    DEFAULT_SAMPLE_INTERVAL_MS, HIGH_RATE_SAMPLE_INTERVAL_US, LOW_RATE_SAMPLE_INTERVAL_MS,
    MS_PER_SECOND, US_PER_SECOND,
};

/// Sampling parameters shared by every integration call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegratorConfig {
    /// Uniform time between consecutive samples, in seconds
    sample_period_s: f32,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self::from_interval_ms(DEFAULT_SAMPLE_INTERVAL_MS)
    }
}

impl IntegratorConfig {
    /// Create a config from a sampling period in seconds
    pub const fn new(sample_period_s: f32) -> Self {
        Self { sample_period_s }
    }

    /// Create a config from an output data rate in Hz
    pub fn from_rate_hz(rate_hz: f32) -> Self {
        Self::new(1.0 / rate_hz)
    }

    /// Create a config from a sampling interval in milliseconds
    pub fn from_interval_ms(interval_ms: u64) -> Self {
        Self::new(interval_ms as f32 / MS_PER_SECOND as f32)
    }

    /// Create a config from a sampling interval in microseconds
    pub fn from_interval_us(interval_us: u64) -> Self {
        Self::new(interval_us as f32 / US_PER_SECOND as f32)
    }

    /// Battery-friendly 10 Hz sampling
    pub fn low_rate() -> Self {
        Self::from_interval_ms(LOW_RATE_SAMPLE_INTERVAL_MS)
    }

    /// 1 kHz sampling for vibration and impact capture
    pub fn high_rate() -> Self {
        Self::from_interval_us(HIGH_RATE_SAMPLE_INTERVAL_US)
    }

    /// Sampling period in seconds (`dt`)
    pub fn sample_period_s(&self) -> f32 {
        self.sample_period_s
    }

    /// Sampling rate in Hz
    pub fn sample_rate_hz(&self) -> f32 {
        1.0 / self.sample_period_s
    }

    /// Time spanned by `count` samples, `dt · count`
    ///
    /// This is the scale factor used by the position derivation, not the
    /// `dt · (count - 1)` length of the sampled interval.
    pub fn window_duration_s(&self, count: usize) -> f32 {
        self.sample_period_s * count as f32
    }
}
