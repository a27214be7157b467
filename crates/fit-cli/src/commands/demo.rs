//! Demo command: the fixed built-in list of sample sensor packages.

use anyhow::Result;

use super::report;

/// Built-in sample packages, processed in this order.
const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Formats one summary line per sample package, in input order.
pub fn render() -> Result<String> {
    let mut lines = Vec::with_capacity(PACKAGES.len());
    for (tag, values) in PACKAGES {
        lines.push(report::format_package(tag, values)?);
    }
    Ok(lines.join("\n"))
}

/// Runs the demo command.
pub fn run() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}
