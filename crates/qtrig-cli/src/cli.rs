// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use qtrig_core::{
    cos_p4_constant, cos_p4_optimized_constant, sin_p5_constant, sin_p5_optimized_constant,
    Approx, RightAngle, Wave,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::audit::{audit_all, AuditRow};
use crate::config::{default_budgets, AuditConfig};

/// Deterministic integer sine/cosine toolkit
#[derive(Parser)]
#[command(name = "qtrig")]
#[command(version)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// qtrig subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one approximation at one angle
    Eval {
        /// Approximation order (p1, p2, p3, p4, p4o, p5, p5o)
        approx: Approx,
        /// sin or cos
        wave: Wave,
        /// Angle in right-angle units
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Right-angle scale
        #[arg(long, default_value_t = RightAngle::DEFAULT, value_parser = parse_right)]
        right: RightAngle,
    },
    /// Print values over an inclusive range of angles
    Sweep {
        /// Approximation order
        approx: Approx,
        /// sin or cos
        #[arg(long, default_value_t = Wave::Sin)]
        wave: Wave,
        /// Right-angle scale
        #[arg(long, default_value_t = RightAngle::DEFAULT, value_parser = parse_right)]
        right: RightAngle,
        /// First angle
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i32,
        /// Last angle (inclusive); defaults to one full turn
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i32>,
        /// Distance between angles
        #[arg(long, default_value_t = 4096, value_parser = clap::value_parser!(u32).range(1..))]
        step: u32,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Measure maximum error of every order against a libm reference
    Audit {
        /// Right-angle scale (overrides config)
        #[arg(long, value_parser = parse_right)]
        right: Option<RightAngle>,
        /// Samples over one full turn (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        samples: Option<u32>,
        /// JSON audit config with error budgets
        #[arg(long)]
        config: Option<PathBuf>,
        /// Enforce the built-in budgets when no config is given
        #[arg(long)]
        strict: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the derived polynomial coefficients
    Constants {
        /// Right-angle scale
        #[arg(long, default_value_t = RightAngle::DEFAULT, value_parser = parse_right)]
        right: RightAngle,
    },
}

fn parse_right(s: &str) -> Result<RightAngle, String> {
    let value: i64 = s.parse().map_err(|e| format!("{s:?} is not an integer: {e}"))?;
    RightAngle::try_from(value).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct SweepPoint {
    x: i32,
    value: i32,
}

/// Parses arguments, installs logging and runs the selected command.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

/// Runs `command`, writing results to `out`.
pub fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Eval {
            approx,
            wave,
            x,
            right,
        } => {
            let value = approx.eval(wave, x, right.get());
            writeln!(out, "{value}")?;
        }
        Commands::Sweep {
            approx,
            wave,
            right,
            from,
            to,
            step,
            json,
        } => {
            let to = to.unwrap_or_else(|| from.saturating_add(right.full_turn()));
            if to < from {
                bail!("empty sweep: --to {to} is below --from {from}");
            }
            info!(%approx, %wave, %right, from, to, step, "sweep");
            let step = usize::try_from(step).context("step does not fit in usize")?;
            let points = (from..=to).step_by(step).map(|x| SweepPoint {
                x,
                value: approx.eval(wave, x, right.get()),
            });
            if json {
                let points: Vec<SweepPoint> = points.collect();
                serde_json::to_writer_pretty(&mut *out, &points)?;
                writeln!(out)?;
            } else {
                let mut table = Table::new();
                table.set_header(vec!["x".to_owned(), format!("{wave}_{approx}")]);
                for p in points {
                    table.add_row(vec![p.x.to_string(), p.value.to_string()]);
                }
                writeln!(out, "{table}")?;
            }
        }
        Commands::Audit {
            right,
            samples,
            config,
            strict,
            json,
        } => {
            let mut cfg = match &config {
                Some(path) => AuditConfig::load(path)?,
                None if strict => AuditConfig::default(),
                None => AuditConfig::report_only(),
            };
            if let Some(right) = right {
                cfg.right = right;
            }
            if let Some(samples) = samples {
                cfg.samples = samples;
            }
            cfg.validate()?;
            info!(right = %cfg.right, samples = cfg.samples, budgets = cfg.budgets.len(), "audit");

            let rows = audit_all(&cfg);
            write_audit(out, &rows, json)?;

            let exceeded: Vec<&AuditRow> = rows.iter().filter(|r| !r.within_budget()).collect();
            for row in &exceeded {
                warn!(
                    approx = %row.approx,
                    wave = %row.wave,
                    max_abs_error = row.max_abs_error,
                    budget = row.budget,
                    worst_x = row.worst_x,
                    "error budget exceeded"
                );
            }
            if !exceeded.is_empty() {
                bail!(
                    "{} of {} audits exceeded their error budget",
                    exceeded.len(),
                    rows.len()
                );
            }
        }
        Commands::Constants { right } => {
            let r = right.get();
            let mut table = Table::new();
            table.set_header(vec!["constant", "real", "value"]);
            table.add_row(vec![
                "cos_p4".to_owned(),
                "1 - pi/4".to_owned(),
                cos_p4_constant(r).to_string(),
            ]);
            table.add_row(vec![
                "sin_p5".to_owned(),
                "pi/2".to_owned(),
                sin_p5_constant(r).to_string(),
            ]);
            table.add_row(vec![
                "cos_p4_optimized".to_owned(),
                "5(1 - 3/pi)".to_owned(),
                cos_p4_optimized_constant(r).to_string(),
            ]);
            table.add_row(vec![
                "sin_p5_optimized".to_owned(),
                "4(3/pi - 9/16)".to_owned(),
                sin_p5_optimized_constant(r).to_string(),
            ]);
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

fn write_audit(out: &mut impl Write, rows: &[AuditRow], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
        return Ok(());
    }
    let budgets = default_budgets();
    let mut table = Table::new();
    table.set_header(vec![
        "approx",
        "degree",
        "wave",
        "max_abs_error",
        "worst_x",
        "budget",
        "ok",
    ]);
    for row in rows {
        let budget = row
            .budget
            .map_or_else(|| "-".to_owned(), |b| format!("{b:e}"));
        let marker = if row.within_budget() { "ok" } else { "FAIL" };
        // Flag rows that would miss the built-in budget even when unenforced.
        let note = match (row.budget, budgets.get(&row.approx)) {
            (None, Some(b)) if row.max_abs_error > *b => "~",
            _ => marker,
        };
        table.add_row(vec![
            row.approx.to_string(),
            row.approx.degree().to_string(),
            row.wave.to_string(),
            format!("{:.6e}", row.max_abs_error),
            row.worst_x.to_string(),
            budget,
            note.to_owned(),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}
