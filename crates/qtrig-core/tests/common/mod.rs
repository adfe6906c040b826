// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use qtrig_core::{
    cos_p1, cos_p2, cos_p3, cos_p4, cos_p4o, cos_p5, cos_p5o, sin_p1, sin_p2, sin_p3, sin_p4,
    sin_p4o, sin_p5, sin_p5o,
};

pub type TrigFn = fn(i32, i32) -> i32;

/// (name, sin, cos, odd order)
pub const PAIRS: [(&str, TrigFn, TrigFn, bool); 7] = [
    ("p1", sin_p1, cos_p1, true),
    ("p2", sin_p2, cos_p2, false),
    ("p3", sin_p3, cos_p3, true),
    ("p4", sin_p4, cos_p4, false),
    ("p4o", sin_p4o, cos_p4o, false),
    ("p5", sin_p5, cos_p5, true),
    ("p5o", sin_p5o, cos_p5o, true),
];

/// Every sine and cosine, flattened.
#[allow(dead_code)]
pub fn all_fns() -> impl Iterator<Item = (String, TrigFn)> {
    PAIRS.into_iter().flat_map(|(name, sin, cos, _)| {
        [(format!("sin_{name}"), sin), (format!("cos_{name}"), cos)]
    })
}
