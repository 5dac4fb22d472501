//! Composite Simpson Integration with a Trapezoidal Tail
//!
//! ## Overview
//!
//! Integrates a uniformly sampled signal `y[n] = y(n·dt)` over the whole
//! buffer. This is the one algorithm in the crate; velocity and position
//! derivations in [`crate::kinematics`] are thin wrappers around it.
//!
//! ## Algorithm
//!
//! Simpson triples start at even offsets and walk the buffer two intervals at
//! a time. When the sample count is even, one interval is left over and is
//! closed with the trapezoidal rule:
//!
//! ```text
//! n = 5 (odd):    [0 1 2][2 3 4]
//!                 simpson simpson
//!
//! n = 6 (even):   [0 1 2][2 3 4][4 5]
//!                 simpson simpson trapezoid
//! ```
//!
//! Neighbouring segments share their end sample, so sample `n-2` of an even
//! buffer is weighted by both the last triple and the trapezoid. The segments
//! themselves never overlap.
//!
//! ## Numeric Semantics
//!
//! Partial areas are accumulated in ascending index order, triples first and
//! the trapezoid last. Identical inputs always give bit-identical results.
//!
//! Exact (up to rounding) for constant and linear signals. Each Simpson
//! triple is exact for cubics; the trapezoidal tail is not, so even-length
//! buffers carry an `O(dt³)` error from their last interval.
//!
//! ## Preconditions
//!
//! Not checked, all caller responsibilities:
//! - `dt > 0` (zero gives `0.0`, negative flips the sign)
//! - finite samples (NaN and infinity propagate)
//!
//! Buffers shorter than [`MIN_SIMPSON_SAMPLES`] are the one recognised
//! degraded input. [`try_integrate`] reports it as an error; [`integrate`]
//! and [`integrate_with`] report it to a sink and return `0.0`.
//!
//! No allocation, no panics for any slice.

use crate::{
    constants::quadrature::{
        MIN_SIMPSON_SAMPLES, SIMPSON_DIVISOR, SIMPSON_MIDPOINT_WEIGHT, SIMPSON_STRIDE,
        TRAPEZOID_DIVISOR,
    },
    diagnostics::LogSink,
    errors::{IntegrationError, IntegrationResult},
    traits::DiagnosticSink,
};

/// Integrate `samples` taken every `dt` seconds
///
/// Returns the error instead of a neutral value when the buffer is too short.
///
/// ```rust
/// use imuquad_core::quadrature::try_integrate;
///
/// assert_eq!(try_integrate(&[0.0, 1.0, 2.0, 3.0, 4.0], 1.0), Ok(8.0));
/// assert!(try_integrate(&[5.0], 0.1).is_err());
/// ```
pub fn try_integrate(samples: &[f32], dt: f32) -> IntegrationResult<f32> {
    if samples.len() < MIN_SIMPSON_SAMPLES {
        return Err(IntegrationError::InsufficientSamples {
            required: MIN_SIMPSON_SAMPLES,
            available: samples.len(),
        });
    }

    let mut integral = 0.0;

    for triple in samples.windows(3).step_by(SIMPSON_STRIDE) {
        integral += simpson_triple(triple[0], triple[1], triple[2], dt);
    }

    // Even count leaves one interval after the last triple
    if samples.len() % 2 == 0 {
        if let [.., second_last, last] = samples {
            integral += trapezoid(*second_last, *last, dt);
        }
    }

    Ok(integral)
}

/// Integrate `samples`, reporting a too-short buffer to `sink`
///
/// On degraded input the notice is delivered first, then `0.0` is returned.
/// A `0.0` result is therefore ambiguous on its own; use the sink or
/// [`try_integrate`] to tell "no samples" from "no area".
pub fn integrate_with<S: DiagnosticSink>(samples: &[f32], dt: f32, sink: &S) -> f32 {
    match try_integrate(samples, dt) {
        Ok(integral) => integral,
        Err(error) => {
            sink.notice(&error);
            0.0
        }
    }
}

/// Integrate `samples`, logging a too-short buffer
///
/// Always succeeds. Equivalent to [`integrate_with`] with a [`LogSink`].
pub fn integrate(samples: &[f32], dt: f32) -> f32 {
    integrate_with(samples, dt, &LogSink)
}

/// Simpson's rule over two intervals: `(y0 + 4·y1 + y2) · dt / 3`
#[inline]
fn simpson_triple(y0: f32, y1: f32, y2: f32, dt: f32) -> f32 {
    (y0 + SIMPSON_MIDPOINT_WEIGHT * y1 + y2) * dt / SIMPSON_DIVISOR
}

/// Trapezoidal rule over one interval: `(y0 + y1) · dt / 2`
#[inline]
fn trapezoid(y0: f32, y1: f32, dt: f32) -> f32 {
    (y0 + y1) * dt / TRAPEZOID_DIVISOR
}
