// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle reduction: modulo normalization, quadrant classification and the
//! quarter-turn phase shifts used to reuse sine bodies for cosine and back.
//!
//! Internals work on `i64` so `4 * right` and the shifted angles never
//! overflow, whatever the `i32` input.

/// Mathematical modulo: returns `value mod length` in `[0, length)`.
///
/// Unlike `%`, the result is never negative: `repeat(-1, 10) == 9`.
///
/// `length` must be positive. This is a caller contract; it is asserted in
/// debug builds only.
#[inline]
pub fn repeat(value: i32, length: i32) -> i32 {
    debug_assert!(length > 0, "repeat: length must be positive, got {length}");
    let rem = value % length;
    if rem < 0 {
        rem + length
    } else {
        rem
    }
}

#[inline]
pub(crate) fn repeat_wide(value: i64, length: i64) -> i64 {
    let rem = value % length;
    if rem < 0 {
        rem + length
    } else {
        rem
    }
}

/// One of the four quarter-turn segments of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// `[0, right)`: sine rising from 0 to 1.
    First,
    /// `[right, 2*right)`: sine falling from 1 to 0.
    Second,
    /// `[2*right, 3*right)`: sine falling from 0 to -1.
    Third,
    /// `[3*right, 4*right)`: sine rising from -1 to 0.
    Fourth,
}

impl Quadrant {
    /// All quadrants in turn order.
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Classifies angle `x` on a `right`-unit scale.
    ///
    /// Defined for every `x`; `right` must be positive.
    #[inline]
    pub fn of(x: i32, right: i32) -> Self {
        Self::of_wide(i64::from(x), i64::from(right))
    }

    #[inline]
    pub(crate) fn of_wide(x: i64, right: i64) -> Self {
        let index = repeat_wide(x, 4 * right) / right;
        Self::from_index(index)
            .unwrap_or_else(|| unreachable!("quadrant index {index} out of range for right={right}"))
    }

    /// Maps `0..=3` to a quadrant.
    #[inline]
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            3 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Index of this quadrant, `0..=3`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Advances `x` by a quarter turn after a truncating reduction:
/// `(x % 4*right) + right`.
///
/// `cos(x) == sin(odd_cos_shift(x))`. Uses the truncating `%`, not
/// [`repeat`]; the quadrant logic downstream re-normalizes the result.
#[inline]
pub fn odd_cos_shift(x: i32, right: i32) -> i64 {
    odd_cos_shift_wide(i64::from(x), i64::from(right))
}

/// Delays `x` by a quarter turn after a truncating reduction:
/// `(x % 4*right) - right`.
///
/// `sin(x) == cos(even_sin_shift(x))`.
#[inline]
pub fn even_sin_shift(x: i32, right: i32) -> i64 {
    even_sin_shift_wide(i64::from(x), i64::from(right))
}

#[inline]
pub(crate) fn odd_cos_shift_wide(x: i64, right: i64) -> i64 {
    x % (4 * right) + right
}

#[inline]
pub(crate) fn even_sin_shift_wide(x: i64, right: i64) -> i64 {
    x % (4 * right) - right
}
