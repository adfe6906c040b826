// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error audit against a deterministic oracle.
//!
//! The reference is the pure-Rust `libm` crate so results do not depend on
//! the host platform's libm.

use std::f64::consts::FRAC_PI_2;

use qtrig_core::{Approx, RightAngle, Wave};
use serde::Serialize;

use crate::config::AuditConfig;

/// Worst observed error for one order and wave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRow {
    /// Order audited.
    pub approx: Approx,
    /// Sine or cosine.
    pub wave: Wave,
    /// Largest `|approx - reference|`, in units of 1.0.
    pub max_abs_error: f64,
    /// Angle at which `max_abs_error` occurred.
    pub worst_x: i32,
    /// Allowed maximum, when one is configured.
    pub budget: Option<f64>,
}

impl AuditRow {
    /// `true` when no budget applies or the error is within it.
    pub fn within_budget(&self) -> bool {
        self.budget.is_none_or(|b| self.max_abs_error <= b)
    }
}

/// Reference value of `wave` at `x` on the `right` scale, in units of 1.0.
pub fn reference(wave: Wave, x: i32, right: RightAngle) -> f64 {
    let angle = f64::from(x) * FRAC_PI_2 / f64::from(right.get());
    match wave {
        Wave::Sin => libm::sin(angle),
        Wave::Cos => libm::cos(angle),
    }
}

/// `samples` angles evenly spaced over `[0, 4 * right)`.
pub fn sample_angles(right: RightAngle, samples: u32) -> impl Iterator<Item = i32> {
    let full = right.full_turn();
    let n = samples.max(1);
    (0..n).map(move |i| sample_angle(i, full, n))
}

#[allow(clippy::cast_possible_truncation)]
fn sample_angle(i: u32, full: i32, n: u32) -> i32 {
    // i < n <= u32::MAX and full < 2^31, so the product fits in i64 and the
    // quotient is below `full`.
    (i64::from(i) * i64::from(full) / i64::from(n)) as i32
}

/// Audits one order and wave.
pub fn audit_one(
    approx: Approx,
    wave: Wave,
    right: RightAngle,
    samples: u32,
    budget: Option<f64>,
) -> AuditRow {
    let scale = f64::from(right.get());
    let mut max_abs_error: f64 = 0.0;
    let mut worst_x = 0;
    for x in sample_angles(right, samples) {
        let value = f64::from(approx.eval(wave, x, right.get())) / scale;
        let err = (value - reference(wave, x, right)).abs();
        if err > max_abs_error {
            max_abs_error = err;
            worst_x = x;
        }
    }
    AuditRow {
        approx,
        wave,
        max_abs_error,
        worst_x,
        budget,
    }
}

/// Audits every order and wave under `config`.
pub fn audit_all(config: &AuditConfig) -> Vec<AuditRow> {
    Approx::ALL
        .into_iter()
        .flat_map(|approx| {
            let budget = config.budgets.get(&approx).copied();
            Wave::ALL.into_iter().map(move |wave| {
                let row = audit_one(approx, wave, config.right, config.samples, budget);
                tracing::debug!(
                    approx = %row.approx,
                    wave = %row.wave,
                    max_abs_error = row.max_abs_error,
                    worst_x = row.worst_x,
                    "audited"
                );
                row
            })
        })
        .collect()
}
