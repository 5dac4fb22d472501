//! Quadrature Constants
//!
//! Weights of the composite Simpson rule with a trapezoidal tail.
//!
//! ```text
//! Simpson triple over [x_i, x_i+2]:   (y_i + 4·y_i+1 + y_i+2) · dt / 3
//! Trapezoid over  [x_n-2, x_n-1]:     (y_n-2 + y_n-1) · dt / 2
//! ```

/// Minimum number of samples needed to form one Simpson triple.
///
/// Fewer samples is the "insufficient samples" condition.
pub const MIN_SIMPSON_SAMPLES: usize = 3;

/// Weight applied to the middle sample of each Simpson triple.
pub const SIMPSON_MIDPOINT_WEIGHT: f32 = 4.0;

/// Divisor of a Simpson triple (the `3` in `h/3`).
pub const SIMPSON_DIVISOR: f32 = 3.0;

/// Divisor of the trailing trapezoid (the `2` in `h/2`).
pub const TRAPEZOID_DIVISOR: f32 = 2.0;

/// Number of samples a Simpson triple advances by.
///
/// Triples start at even offsets and share their end point with the next one.
pub const SIMPSON_STRIDE: usize = 2;
