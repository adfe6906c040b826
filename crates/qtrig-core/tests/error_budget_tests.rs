// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::print_stderr)]

mod common;

use std::f64::consts::FRAC_PI_2;

use common::PAIRS;
use qtrig_core::DEFAULT_RIGHT;

// Pinned to the current integer bodies at `right = 1 << 15`. Measured maxima
// over one full turn: p1 0.2105, p2 0.0560, p3 0.0200, p4 0.00282,
// p4o 0.00119, p5 0.000412, p5o 0.000214.
const BUDGETS: [(&str, f64); 7] = [
    ("p1", 0.22),
    ("p2", 0.06),
    ("p3", 0.021),
    ("p4", 0.003),
    ("p4o", 0.0013),
    ("p5", 0.00045),
    ("p5o", 0.00025),
];

fn oracle(x: i32, right: i32) -> (f64, f64) {
    // `libm` is pure Rust, so the reference does not depend on host libm.
    let angle = f64::from(x) * FRAC_PI_2 / f64::from(right);
    (libm::sin(angle), libm::cos(angle))
}

#[test]
fn max_abs_error_within_budget_over_full_turn() {
    let right = DEFAULT_RIGHT;
    let scale = f64::from(right);

    for ((name, sin, cos, _), (budget_name, budget)) in PAIRS.into_iter().zip(BUDGETS) {
        assert_eq!(name, budget_name);

        let mut max_abs: f64 = 0.0;
        let mut worst_x = 0;
        for x in 0..4 * right {
            let (s_ref, c_ref) = oracle(x, right);
            let s_err = (f64::from(sin(x, right)) / scale - s_ref).abs();
            let c_err = (f64::from(cos(x, right)) / scale - c_ref).abs();
            let err = s_err.max(c_err);
            if err > max_abs {
                max_abs = err;
                worst_x = x;
            }
        }

        if std::env::var("QTRIG_AUDIT_PRINT").is_ok() {
            eprintln!("{name}: max_abs={max_abs:e} (x={worst_x})");
        }

        assert!(
            max_abs <= budget,
            "{name}: abs-error budget exceeded: max_abs={max_abs:e} budget={budget:e} worst_x={worst_x}"
        );
    }
}

#[test]
fn higher_orders_are_more_accurate() {
    let right = DEFAULT_RIGHT;
    let scale = f64::from(right);
    let max_err = |sin: fn(i32, i32) -> i32| {
        (0..right)
            .step_by(17)
            .map(|x| (f64::from(sin(x, right)) / scale - oracle(x, right).0).abs())
            .fold(0.0_f64, f64::max)
    };

    let errors: Vec<f64> = PAIRS.iter().map(|&(_, sin, _, _)| max_err(sin)).collect();
    // p1 > p2 > p3 > p4 > p4o > p5 > p5o
    for pair in errors.windows(2) {
        assert!(pair[0] > pair[1], "error ordering violated: {errors:?}");
    }
}

#[test]
fn optimized_variants_trade_origin_slope_for_max_error() {
    let right = DEFAULT_RIGHT;
    // Near the origin the exact-slope p5 tracks sin better than p5o.
    for x in [1024, 2048, 4096] {
        let s_ref = oracle(x, right).0 * f64::from(right);
        let p5 = (f64::from(qtrig_core::sin_p5(x, right)) - s_ref).abs();
        let p5o = (f64::from(qtrig_core::sin_p5o(x, right)) - s_ref).abs();
        assert!(p5 < p5o, "x={x}: p5={p5} p5o={p5o}");
    }
}
