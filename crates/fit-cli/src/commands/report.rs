//! Report command: one sensor package in, one summary line out.

use anyhow::{Context, Result};

/// Decodes one sensor package and formats its summary line.
pub fn format_package(tag: &str, values: &[f64]) -> Result<String> {
    let workout = fit_core::read_package(tag, values)
        .with_context(|| format!("failed to decode {tag} package"))?;
    let summary = workout
        .summarize()
        .with_context(|| format!("failed to summarize {tag} workout"))?;
    tracing::debug!(label = summary.label(), "summarized workout");
    Ok(summary.to_string())
}

/// Runs the report command.
pub fn run(tag: &str, values: &[f64]) -> Result<()> {
    let line = format_package(tag, values)?;
    println!("{line}");
    Ok(())
}
