//! Error Types for Degraded Integration Input
//!
//! ## Design Philosophy
//!
//! The integration path runs inside sensor loops on small devices, so errors
//! follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant carries only a couple of `usize` fields.
//!
//! 2. **No Heap Allocation**: no `String`, no boxed sources. Errors can be
//!    stored in queues or static health records.
//!
//! 3. **Copy Semantics**: errors are `Copy` so they can be handed to a
//!    [`DiagnosticSink`](crate::traits::DiagnosticSink) and still returned.
//!
//! ## Error Categories
//!
//! ### Degraded Input
//! - `InsufficientSamples`: fewer than three samples, so not even one Simpson
//!   triple can be formed.
//!
//! ### Collection
//! - `WindowFull`: a [`SampleWindow`](crate::window::SampleWindow) has no room
//!   for another sample.
//!
//! ## Two Ways To Ask
//!
//! The legacy call sites (`integrate`, `velocity_change`, `position_change`)
//! always succeed and return `0.0` on degraded input, after reporting the
//! error to a sink. The `try_` variants hand the error back instead, which is
//! the only way to tell "no samples" apart from "no motion":
//!
//! ```rust
//! use imuquad_core::{quadrature, IntegrationError};
//!
//! let samples = [0.2_f32, 0.4];
//! match quadrature::try_integrate(&samples, 0.01) {
//!     Ok(dv) => { let _ = dv; }
//!     Err(IntegrationError::InsufficientSamples { required, available }) => {
//!         assert_eq!((required, available), (3, 2));
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for integration operations
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Integration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationError {
    /// Not enough samples to form a single Simpson triple
    #[error("Insufficient samples: need {required}, have {available}")]
    InsufficientSamples {
        /// Minimum number of samples the rule needs
        required: usize,
        /// Number of samples actually supplied
        available: usize,
    },

    /// Sample window has reached its fixed capacity
    #[error("Sample window full: capacity {capacity}")]
    WindowFull {
        /// Compile-time capacity of the window
        capacity: usize,
    },
}

impl IntegrationError {
    /// True if this error came from a too-short sample buffer
    pub fn is_insufficient_samples(&self) -> bool {
        matches!(self, Self::InsufficientSamples { .. })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IntegrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientSamples { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::WindowFull { capacity } =>
                defmt::write!(fmt, "Window full ({})", capacity),
        }
    }
}
