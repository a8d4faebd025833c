//! Evaluation Binary
//!
//! Scores a JSON Lines file of classifier outputs against a class list and
//! writes per-sample, per-cell, and per-object reports.
//!
//! Options: --classes, --scores, --output, --strict, --parallel, --json

use azimuth::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log();
    cli::Args::parse().run()?;
    log::info!("evaluation finished");
    Ok(())
}
