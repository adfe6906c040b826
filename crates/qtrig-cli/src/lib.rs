// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! qtrig developer CLI.
//!
//! Tooling around `qtrig-core`: evaluate single angles, sweep ranges, and
//! audit every approximation order against a host-independent `libm`
//! reference with optional per-order error budgets.

pub mod audit;
pub mod cli;
pub mod config;
