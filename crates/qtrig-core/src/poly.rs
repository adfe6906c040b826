// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Polynomial sine/cosine approximations of orders 1 through 5.
//!
//! Strategy:
//! - reduce the angle to a quadrant and an offset `rem` in `[0, right)`
//! - odd orders (1, 3, 5) start from the triangle wave [`sin_p1`] and apply an
//!   odd correction polynomial; cosine is sine advanced by a quarter turn
//! - even orders (2, 4) evaluate `1 - f(z)` per quadrant through a shared
//!   skeleton; sine is cosine delayed by a quarter turn
//!
//! All bodies work on `i64` with `right` as the unit. For `right` in
//! `1..=MAX_RIGHT` the largest intermediate is about `3 * right^2 < 2^61`, so
//! nothing overflows. Division truncates toward zero, which keeps sine odd and
//! cosine even bit-for-bit. Every order is exact at the four quadrant edges.

use crate::coeffs::{
    cos_p4_constant, cos_p4_optimized_constant, sin_p5_constant, sin_p5_optimized_constant,
};
use crate::reduce::{even_sin_shift_wide, odd_cos_shift_wide, repeat_wide, Quadrant};

#[inline]
fn widen(x: i32, right: i32) -> (i64, i64) {
    debug_assert!(
        (1..=crate::MAX_RIGHT).contains(&right),
        "right angle out of range: {right}"
    );
    (i64::from(x), i64::from(right))
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: i64) -> i32 {
    // Results are bounded by `right`, which fits in i32.
    value as i32
}

// ── Degree 1 ────────────────────────────────────────────────────────────

fn sin_p1_wide(x: i64, right: i64) -> i64 {
    let rem = repeat_wide(x, right);
    match Quadrant::of_wide(x, right) {
        Quadrant::First => rem,
        Quadrant::Second => right - rem,
        Quadrant::Third => -rem,
        Quadrant::Fourth => rem - right,
    }
}

/// Triangle-wave sine: exact at the quadrant edges, linear in between.
///
/// `sin_p1(0) == 0`, `sin_p1(right) == right`, `sin_p1(2*right) == 0`,
/// `sin_p1(3*right) == -right`.
pub fn sin_p1(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(sin_p1_wide(x, right))
}

/// Triangle-wave cosine.
pub fn cos_p1(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(sin_p1_wide(odd_cos_shift_wide(x, right), right))
}

// ── Even skeleton (degrees 2 and 4) ─────────────────────────────────────

/// Evaluates `1 - f(z)` by quadrant, where `f` maps an offset in `[0, right]`
/// to `right^2` scale with `f(0) == 0` and `f(right) == right^2`.
fn even_approx(x: i64, right: i64, f: impl Fn(i64) -> i64) -> i64 {
    let rem = repeat_wide(x, right);
    let k = right * right;
    let scaled = match Quadrant::of_wide(x, right) {
        Quadrant::First => k - f(rem),
        Quadrant::Second => f(right - rem) - k,
        Quadrant::Third => f(rem) - k,
        Quadrant::Fourth => k - f(right - rem),
    };
    scaled / right
}

// ── Degree 2 ────────────────────────────────────────────────────────────

fn cos_p2_wide(x: i64, right: i64) -> i64 {
    even_approx(x, right, |z| z * z)
}

/// Quadratic cosine `1 - x^2`.
pub fn cos_p2(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(cos_p2_wide(x, right))
}

/// Quadratic sine, from [`cos_p2`] delayed by a quarter turn.
pub fn sin_p2(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(cos_p2_wide(even_sin_shift_wide(x, right), right))
}

// ── Degree 3 ────────────────────────────────────────────────────────────

fn sin_p3_wide(x: i64, right: i64) -> i64 {
    let z = sin_p1_wide(x, right);
    let k = right / 2;
    let z2 = z * z / right;
    ((right + k) - k * z2 / right) * z / right
}

/// Cubic sine `1.5x - 0.5x^3`.
pub fn sin_p3(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(sin_p3_wide(x, right))
}

/// Cubic cosine, from [`sin_p3`] advanced by a quarter turn.
pub fn cos_p3(x: i32, right: i32) -> i32 {
    let (x, right) = widen(x, right);
    narrow(sin_p3_wide(odd_cos_shift_wide(x, right), right))
}

// ── Degree 4 ────────────────────────────────────────────────────────────

fn cos_p4_wide(x: i64, right: i64, k: i64) -> i64 {
    // (k + 1) z^2 - k z^4, on the right^2 scale.
    even_approx(x, right, |z| {
        let z2 = z * z / right;
        let z4 = z2 * z2 / right;
        (k + right) * z2 - k * z4
    })
}

/// Quartic cosine `1 - (k+1)x^2 + k x^4` with `k = 1 - π/4`.
pub fn cos_p4(x: i32, right: i32) -> i32 {
    let k = i64::from(cos_p4_constant(right));
    let (x, right) = widen(x, right);
    narrow(cos_p4_wide(x, right, k))
}

/// Quartic sine, from [`cos_p4`] delayed by a quarter turn.
pub fn sin_p4(x: i32, right: i32) -> i32 {
    let k = i64::from(cos_p4_constant(right));
    let (x, right) = widen(x, right);
    narrow(cos_p4_wide(even_sin_shift_wide(x, right), right, k))
}

/// Quartic cosine with the minimax coefficient `k = 5(1 - 3/π)`.
pub fn cos_p4o(x: i32, right: i32) -> i32 {
    let k = i64::from(cos_p4_optimized_constant(right));
    let (x, right) = widen(x, right);
    narrow(cos_p4_wide(x, right, k))
}

/// Quartic sine with the minimax coefficient.
pub fn sin_p4o(x: i32, right: i32) -> i32 {
    let k = i64::from(cos_p4_optimized_constant(right));
    let (x, right) = widen(x, right);
    narrow(cos_p4_wide(even_sin_shift_wide(x, right), right, k))
}

// ── Degree 5 ────────────────────────────────────────────────────────────

fn sin_p5_wide(x: i64, right: i64, k: i64) -> i64 {
    // k x - (2k - 2.5) x^3 + (k - 1.5) x^5, with coefficients doubled so the
    // halves stay exact for odd `right`.
    let z = sin_p1_wide(x, right);
    let z2 = z * z / right;
    let a = 4 * k - 5 * right;
    let b = 2 * k - 3 * right;
    let inner = 2 * k - z2 * (a - b * z2 / right) / right;
    z * inner / (2 * right)
}

/// Quintic sine `kx - (2k - 2.5)x^3 + (k - 1.5)x^5` with `k = π/2`.
pub fn sin_p5(x: i32, right: i32) -> i32 {
    let k = i64::from(sin_p5_constant(right));
    let (x, right) = widen(x, right);
    narrow(sin_p5_wide(x, right, k))
}

/// Quintic cosine, from [`sin_p5`] advanced by a quarter turn.
pub fn cos_p5(x: i32, right: i32) -> i32 {
    let k = i64::from(sin_p5_constant(right));
    let (x, right) = widen(x, right);
    narrow(sin_p5_wide(odd_cos_shift_wide(x, right), right, k))
}

/// Quintic sine with the minimax coefficient `k = 4(3/π - 9/16)`.
pub fn sin_p5o(x: i32, right: i32) -> i32 {
    let k = i64::from(sin_p5_optimized_constant(right));
    let (x, right) = widen(x, right);
    narrow(sin_p5_wide(x, right, k))
}

/// Quintic cosine with the minimax coefficient.
pub fn cos_p5o(x: i32, right: i32) -> i32 {
    let k = i64::from(sin_p5_optimized_constant(right));
    let (x, right) = widen(x, right);
    narrow(sin_p5_wide(odd_cos_shift_wide(x, right), right, k))
}
