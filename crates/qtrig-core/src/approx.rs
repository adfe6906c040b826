// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named selectors over the approximation family, for callers that pick an
//! order at runtime (tools, config files, benchmarks).

use core::fmt;
use core::str::FromStr;

use crate::error::TrigError;
use crate::poly;

/// Approximation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Approx {
    /// Piecewise-linear.
    P1,
    /// Quadratic.
    P2,
    /// Cubic.
    P3,
    /// Quartic, `k = 1 - π/4`.
    P4,
    /// Quartic, minimax `k = 5(1 - 3/π)`.
    P4O,
    /// Quintic, `k = π/2`.
    P5,
    /// Quintic, minimax `k = 4(3/π - 9/16)`.
    P5O,
}

/// Which function of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wave {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
}

impl Approx {
    /// Every order, lowest first.
    pub const ALL: [Self; 7] = [
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P4O,
        Self::P5,
        Self::P5O,
    ];

    /// Short lowercase name (`"p4o"`), as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::P4O => "p4o",
            Self::P5 => "p5",
            Self::P5O => "p5o",
        }
    }

    /// Polynomial degree.
    pub const fn degree(self) -> u8 {
        match self {
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P3 => 3,
            Self::P4 | Self::P4O => 4,
            Self::P5 | Self::P5O => 5,
        }
    }

    /// Sine of `x` on the `right` scale.
    pub fn sin(self, x: i32, right: i32) -> i32 {
        let f: fn(i32, i32) -> i32 = match self {
            Self::P1 => poly::sin_p1,
            Self::P2 => poly::sin_p2,
            Self::P3 => poly::sin_p3,
            Self::P4 => poly::sin_p4,
            Self::P4O => poly::sin_p4o,
            Self::P5 => poly::sin_p5,
            Self::P5O => poly::sin_p5o,
        };
        f(x, right)
    }

    /// Cosine of `x` on the `right` scale.
    pub fn cos(self, x: i32, right: i32) -> i32 {
        let f: fn(i32, i32) -> i32 = match self {
            Self::P1 => poly::cos_p1,
            Self::P2 => poly::cos_p2,
            Self::P3 => poly::cos_p3,
            Self::P4 => poly::cos_p4,
            Self::P4O => poly::cos_p4o,
            Self::P5 => poly::cos_p5,
            Self::P5O => poly::cos_p5o,
        };
        f(x, right)
    }

    /// Evaluates `wave` of `x`.
    pub fn eval(self, wave: Wave, x: i32, right: i32) -> i32 {
        match wave {
            Wave::Sin => self.sin(x, right),
            Wave::Cos => self.cos(x, right),
        }
    }
}

impl Wave {
    /// Both waves.
    pub const ALL: [Self; 2] = [Self::Sin, Self::Cos];

    /// `"sin"` or `"cos"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

impl fmt::Display for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Approx {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrigError::UnknownApprox(s.to_owned()))
    }
}

impl FromStr for Wave {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrigError::UnknownWave(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::DEFAULT_RIGHT;

    #[test]
    fn names_parse_back() {
        for a in Approx::ALL {
            assert_eq!(a.name().parse::<Approx>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
        assert_eq!("P4O".parse::<Approx>(), Ok(Approx::P4O));
        assert_eq!("COS".parse::<Wave>(), Ok(Wave::Cos));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "p6".parse::<Approx>(),
            Err(TrigError::UnknownApprox("p6".to_owned()))
        );
        assert_eq!(
            "tan".parse::<Wave>(),
            Err(TrigError::UnknownWave("tan".to_owned()))
        );
    }

    #[test]
    fn dispatch_reaches_each_order() {
        let x = DEFAULT_RIGHT / 3;
        assert_eq!(Approx::P1.sin(x, DEFAULT_RIGHT), poly::sin_p1(x, DEFAULT_RIGHT));
        assert_eq!(Approx::P4O.cos(x, DEFAULT_RIGHT), poly::cos_p4o(x, DEFAULT_RIGHT));
        assert_eq!(
            Approx::P5O.eval(Wave::Sin, x, DEFAULT_RIGHT),
            poly::sin_p5o(x, DEFAULT_RIGHT)
        );
        assert_eq!(Approx::P3.eval(Wave::Cos, x, DEFAULT_RIGHT), 27914);
        assert_eq!(Approx::P5.degree(), 5);
        assert_eq!(Approx::P4O.degree(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Approx::P5O).unwrap();
        assert_eq!(json, "\"p5o\"");
        let wave: Wave = serde_json::from_str("\"cos\"").unwrap();
        assert_eq!(wave, Wave::Cos);
        let right: crate::RightAngle = serde_json::from_str("1024").unwrap();
        assert_eq!(right.get(), 1024);
        assert!(serde_json::from_str::<crate::RightAngle>("0").is_err());
    }
}
