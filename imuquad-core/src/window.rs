//! Fixed-Capacity Sample Window
//!
//! ## Overview
//!
//! The integrator works on a complete, pre-collected buffer. On a device
//! without a heap, the samples for that buffer have to be gathered somewhere
//! first; [`SampleWindow`] is that somewhere. It is a thin wrapper around
//! `heapless::Vec` with a capacity fixed at compile time.
//!
//! ## Why Not a Ring Buffer?
//!
//! A ring buffer overwrites the oldest sample when full, which silently
//! shifts the start of the integration interval. A window instead refuses
//! the extra sample with [`IntegrationError::WindowFull`], so the caller
//! decides when a window is complete, integrates it, and clears it.
//!
//! ## Usage
//!
//! ```rust
//! use imuquad_core::{window::SampleWindow, quadrature};
//!
//! let mut window: SampleWindow<8> = SampleWindow::new();
//! for a in [0.0, 0.1, 0.2, 0.3, 0.4] {
//!     window.push(a).unwrap();
//! }
//!
//! let dv = quadrature::integrate(window.as_slice(), 0.01);
//! window.clear();
//! # let _ = dv;
//! ```

use heapless::Vec;

use crate::errors::{IntegrationError, IntegrationResult};

/// Fixed-capacity collection of one acceleration window
///
/// `N` is the maximum number of samples. An odd `N` keeps a full window on
/// pure Simpson triples with no trapezoidal tail.
#[derive(Debug, Clone, Default)]
pub struct SampleWindow<const N: usize> {
    samples: Vec<f32, N>,
}

impl<const N: usize> SampleWindow<N> {
    /// Create an empty window
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Append a sample
    ///
    /// Returns `WindowFull` and leaves the window unchanged once `N` samples
    /// are stored.
    pub fn push(&mut self, sample: f32) -> IntegrationResult<()> {
        self.samples
            .push(sample)
            .map_err(|_| IntegrationError::WindowFull { capacity: N })
    }

    /// Append as many samples as fit
    ///
    /// Returns the number of samples taken. Samples past the capacity are
    /// not copied.
    pub fn extend_from_slice(&mut self, samples: &[f32]) -> usize {
        let room = N - self.samples.len();
        let taken = room.min(samples.len());
        // Cannot fail: `taken` fits in the remaining capacity
        let _ = self.samples.extend_from_slice(&samples[..taken]);
        taken
    }

    /// Stored samples, oldest first
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the window is full
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Maximum number of samples
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<const N: usize> AsRef<[f32]> for SampleWindow<N> {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}
