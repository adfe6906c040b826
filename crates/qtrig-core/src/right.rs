// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The right-angle scale factor.

use core::fmt;

use crate::error::TrigError;

/// Right-angle scale used by the [`crate::default_right`] entry points.
pub const DEFAULT_RIGHT: i32 = 1 << 15;

/// Largest supported right angle; a full turn (`4 * right`) still fits in `i32`.
pub const MAX_RIGHT: i32 = i32::MAX / 4;

/// Validated right-angle scale.
///
/// The free functions accept a raw `i32` and treat `1..=MAX_RIGHT` as a caller
/// contract. Code that takes the scale from users or config files goes through
/// [`RightAngle::new`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i32"))]
pub struct RightAngle(i32);

impl RightAngle {
    /// `1 << 15`.
    pub const DEFAULT: Self = Self(DEFAULT_RIGHT);

    /// Validates `right` against `1..=MAX_RIGHT`.
    pub fn new(right: i32) -> Result<Self, TrigError> {
        Self::try_from(i64::from(right))
    }

    /// Returns the raw scale.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Length of a full turn (`4 * right`).
    #[must_use]
    pub const fn full_turn(self) -> i32 {
        self.0 * 4
    }
}

impl Default for RightAngle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for RightAngle {
    type Error = TrigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match i32::try_from(value) {
            Ok(right) if (1..=MAX_RIGHT).contains(&right) => Ok(Self(right)),
            _ => Err(TrigError::InvalidRightAngle(value)),
        }
    }
}

impl From<RightAngle> for i32 {
    fn from(value: RightAngle) -> Self {
        value.0
    }
}

impl fmt::Display for RightAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
