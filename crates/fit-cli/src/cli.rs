//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Workout statistics from raw sensor packages.
///
/// Decodes a workout-type tag plus a flat numeric payload, computes
/// distance, mean speed, and calories burned, and prints one summary line
/// per package.
#[derive(Debug, Parser)]
#[command(name = "fit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and print the summary line for one sensor package.
    Report {
        /// The workout type tag (SWM, RUN, or WLK).
        tag: String,

        /// The flat numeric payload, in the tag's positional order.
        #[arg(required = true)]
        values: Vec<f64>,
    },

    /// Print summary lines for the built-in sample packages.
    Demo,
}
