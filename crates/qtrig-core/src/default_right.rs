// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-argument entry points with `right` fixed to [`DEFAULT_RIGHT`]
//! (`1 << 15`): a quarter turn is `32768` and `1.0` is `32768`.

use crate::{poly, DEFAULT_RIGHT};

macro_rules! default_right_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("[`crate::", stringify!($name), "`] with `right = DEFAULT_RIGHT`.")]
            #[inline]
            pub fn $name(x: i32) -> i32 {
                poly::$name(x, DEFAULT_RIGHT)
            }
        )*
    };
}

default_right_fns!(
    sin_p1, cos_p1, sin_p2, cos_p2, sin_p3, cos_p3, sin_p4, cos_p4, sin_p4o, cos_p4o, sin_p5,
    cos_p5, sin_p5o, cos_p5o,
);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn matches_explicit_right() {
        for x in (-200_000..200_000).step_by(1009) {
            assert_eq!(sin_p1(x), crate::sin_p1(x, DEFAULT_RIGHT));
            assert_eq!(cos_p2(x), crate::cos_p2(x, DEFAULT_RIGHT));
            assert_eq!(sin_p3(x), crate::sin_p3(x, DEFAULT_RIGHT));
            assert_eq!(cos_p4o(x), crate::cos_p4o(x, DEFAULT_RIGHT));
            assert_eq!(sin_p5o(x), crate::sin_p5o(x, DEFAULT_RIGHT));
        }
    }

    #[test]
    fn quarter_turn_values() {
        assert_eq!(sin_p5(DEFAULT_RIGHT), DEFAULT_RIGHT);
        assert_eq!(cos_p5(DEFAULT_RIGHT), 0);
        assert_eq!(sin_p4(-DEFAULT_RIGHT), -DEFAULT_RIGHT);
        assert_eq!(cos_p3(2 * DEFAULT_RIGHT), -DEFAULT_RIGHT);
    }
}
