//! Time-Related Constants
//!
//! Unit conversions and the sampling rates typical of MEMS accelerometers.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Microseconds per second.
pub const US_PER_SECOND: u64 = 1_000_000;

// ===== SAMPLING RATES =====

/// Default accelerometer output data rate (Hz).
///
/// 100 Hz is the common default ODR for consumer IMUs and is enough
/// for human and vehicle motion.
pub const DEFAULT_SAMPLE_RATE_HZ: f32 = 100.0;

/// Default sampling interval (milliseconds), matching `DEFAULT_SAMPLE_RATE_HZ`.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 10;

/// Low-rate sampling interval (milliseconds).
///
/// 10 Hz for battery-powered tilt and activity tracking.
pub const LOW_RATE_SAMPLE_INTERVAL_MS: u64 = 100;

/// High-rate sampling interval (microseconds).
///
/// 1 kHz for vibration and impact capture.
pub const HIGH_RATE_SAMPLE_INTERVAL_US: u64 = 1000;

/// High-rate sampling interval (milliseconds).
pub const HIGH_RATE_SAMPLE_INTERVAL_MS: u64 = HIGH_RATE_SAMPLE_INTERVAL_US * MS_PER_SECOND / US_PER_SECOND;
