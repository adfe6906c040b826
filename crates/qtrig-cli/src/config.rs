// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Audit configuration loaded from JSON.
//!
//! ```json
//! { "right": 32768, "samples": 4096, "budgets": { "p4": 0.003, "p5o": 0.00025 } }
//! ```
//!
//! Every field is optional. A missing `budgets` table means the default
//! budgets; an empty table means no budgets.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qtrig_core::{Approx, RightAngle};
use serde::{Deserialize, Serialize};

/// Samples per audit when neither config nor flags say otherwise.
pub const DEFAULT_SAMPLES: u32 = 4096;

/// Maximum absolute error per order at the default right angle.
pub fn default_budgets() -> BTreeMap<Approx, f64> {
    BTreeMap::from([
        (Approx::P1, 0.22),
        (Approx::P2, 0.06),
        (Approx::P3, 0.021),
        (Approx::P4, 0.003),
        (Approx::P4O, 0.0013),
        (Approx::P5, 0.00045),
        (Approx::P5O, 0.00025),
    ])
}

/// Settings for `qtrig audit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Right-angle scale to audit at.
    pub right: RightAngle,
    /// Evenly spaced samples over one full turn.
    pub samples: u32,
    /// Maximum absolute error allowed per order (in units of 1.0).
    pub budgets: BTreeMap<Approx, f64>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            right: RightAngle::DEFAULT,
            samples: DEFAULT_SAMPLES,
            budgets: default_budgets(),
        }
    }
}

impl AuditConfig {
    /// Defaults with no budgets attached; audits only report.
    pub fn report_only() -> Self {
        Self {
            budgets: BTreeMap::new(),
            ..Self::default()
        }
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero sample counts and negative or non-finite budgets.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.samples > 0, "samples must be positive");
        for (approx, budget) in &self.budgets {
            anyhow::ensure!(
                budget.is_finite() && *budget >= 0.0,
                "budget for {approx} must be a finite non-negative number, got {budget}"
            );
        }
        Ok(())
    }
}
