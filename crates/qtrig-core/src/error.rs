// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised at the validated boundary of the crate.
//!
//! The approximation functions themselves never fail: their preconditions are
//! caller contracts. These errors come from the checked constructors and
//! parsers used by tools and configuration layers.

use thiserror::Error;

use crate::right::MAX_RIGHT;

/// Error type for right-angle validation and selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrigError {
    /// The right-angle scale was not in `1..=MAX_RIGHT`.
    #[error("invalid right angle {0}: must be in 1..={max}", max = MAX_RIGHT)]
    InvalidRightAngle(i64),
    /// No approximation order with this name.
    #[error("unknown approximation: {0:?} (expected one of p1, p2, p3, p4, p4o, p5, p5o)")]
    UnknownApprox(String),
    /// No wave with this name.
    #[error("unknown wave: {0:?} (expected sin or cos)")]
    UnknownWave(String),
}
