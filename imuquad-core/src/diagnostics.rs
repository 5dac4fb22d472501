//! Diagnostic sinks
//!
//! Ready-made [`DiagnosticSink`] implementations:
//!
//! - [`LogSink`]: forwards to the `log` facade (with `std`) and to `defmt`
//!   (with `embedded`). This is the default sink.
//! - [`SilentSink`]: drops every notice.
//! - [`CountingSink`]: counts notices and keeps the last one, for tests and
//!   for health counters on devices without a logger.

use core::cell::Cell;

use crate::{errors::IntegrationError, traits::DiagnosticSink};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => { let _ = format_args!($($arg)*); };
}

/// Sink that forwards notices to the platform logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn notice(&self, error: &IntegrationError) {
        match *error {
            IntegrationError::InsufficientSamples { required, available } => {
                log_warn!(
                    "integration requires at least {} samples, have {}; returning 0",
                    required,
                    available
                );
            }
            IntegrationError::WindowFull { capacity } => {
                log_warn!("sample window full at {} samples, sample dropped", capacity);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("imuquad: {}", error);
    }
}

/// Sink that discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn notice(&self, _error: &IntegrationError) {}
}

/// Sink that counts notices
///
/// Uses `Cell`, so it is not `Sync`. Give each thread its own.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: Cell<usize>,
    last: Cell<Option<IntegrationError>>,
}

impl CountingSink {
    /// Create a sink with no recorded notices
    pub const fn new() -> Self {
        Self {
            count: Cell::new(0),
            last: Cell::new(None),
        }
    }

    /// Number of notices received so far
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Most recent notice, if any
    pub fn last(&self) -> Option<IntegrationError> {
        self.last.get()
    }

    /// Forget all recorded notices
    pub fn reset(&self) {
        self.count.set(0);
        self.last.set(None);
    }
}

impl DiagnosticSink for CountingSink {
    fn notice(&self, error: &IntegrationError) {
        self.count.set(self.count.get().saturating_add(1));
        self.last.set(Some(*error));
    }
}
