// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Integer polynomial coefficients derived from real constants.
//!
//! Each coefficient is `round(c * right)` for a closed-form `c`. The float
//! work is a single IEEE-754 multiply followed by `libm::round`, both
//! correctly rounded, so the integers are identical on every platform.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[allow(clippy::cast_possible_truncation)]
fn scaled(c: f64, right: i32) -> i32 {
    // |c| < 2 and right <= MAX_RIGHT, so the product fits in i32.
    libm::round(c * f64::from(right)) as i32
}

/// Degree-4 cosine coefficient `k = 1 - π/4`, scaled by `right`.
///
/// Makes the quartic hit the exact slope `-π/2` at the quarter turn.
pub fn cos_p4_constant(right: i32) -> i32 {
    scaled(1.0 - FRAC_PI_4, right)
}

/// Degree-5 sine coefficient `k = π/2`, scaled by `right`.
pub fn sin_p5_constant(right: i32) -> i32 {
    scaled(FRAC_PI_2, right)
}

/// Minimax degree-4 cosine coefficient `k = 5(1 - 3/π)`, scaled by `right`.
pub fn cos_p4_optimized_constant(right: i32) -> i32 {
    scaled(5.0 * (1.0 - 3.0 / PI), right)
}

/// Minimax degree-5 sine coefficient `k = 4(3/π - 9/16)`, scaled by `right`.
pub fn sin_p5_optimized_constant(right: i32) -> i32 {
    scaled(4.0 * (3.0 / PI - 9.0 / 16.0), right)
}
