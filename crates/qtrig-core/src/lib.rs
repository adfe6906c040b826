// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! qtrig-core: deterministic integer sine/cosine.
//!
//! Angles and results are plain `i32` values expressed against a *right
//! angle* scale: `right` units of angle are a quarter turn, and a result of
//! `right` represents `1.0`. Every approximation is a pure function of its
//! integer inputs, so results are bit-identical on every platform.
//!
//! Coefficients are derived from real constants (π/4, π/2, ...) once per call
//! and rounded to integers; everything after that is integer arithmetic
//! carried in `i64` so no intermediate overflows for any supported
//! [`RightAngle`].
//!
//! Orders available, each as a sine/cosine pair:
//! - `p1`: piecewise-linear (triangle wave)
//! - `p2`, `p4`, `p4o`: even polynomials built around cosine
//! - `p3`, `p5`, `p5o`: odd polynomials built around sine
//!
//! The `o` variants use coefficients that minimize worst-case error instead of
//! matching the exact slope at the origin.
//!
//! Functions taking an explicit `right` live at the crate root; the
//! [`default_right`] module fixes `right` to [`DEFAULT_RIGHT`].
#![forbid(unsafe_code)]

mod approx;
mod coeffs;
pub mod default_right;
mod error;
mod poly;
mod reduce;
mod right;

pub use approx::{Approx, Wave};
pub use coeffs::{
    cos_p4_constant, cos_p4_optimized_constant, sin_p5_constant, sin_p5_optimized_constant,
};
pub use error::TrigError;
pub use poly::{
    cos_p1, cos_p2, cos_p3, cos_p4, cos_p4o, cos_p5, cos_p5o, sin_p1, sin_p2, sin_p3, sin_p4,
    sin_p4o, sin_p5, sin_p5o,
};
pub use reduce::{even_sin_shift, odd_cos_shift, repeat, Quadrant};
pub use right::{RightAngle, DEFAULT_RIGHT, MAX_RIGHT};
