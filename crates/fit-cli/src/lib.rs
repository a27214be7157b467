//! Fitness tracker CLI library.
//!
//! This crate provides the CLI interface for the fitness tracker.

mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
