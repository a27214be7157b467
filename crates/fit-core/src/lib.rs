//! Core domain logic for the fitness tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Workout types: the closed set of sensor activity tags
//! - Workouts: per-activity distance, speed, and calorie formulas
//! - Packages: decoding a tag plus flat numeric payload into a workout
//! - Summaries: the immutable per-workout measurement record

mod package;
mod summary;
pub mod workout;
pub mod workout_type;

pub use package::{PackageError, build_workout, read_package};
pub use summary::TrainingSummary;
pub use workout::{ComputeError, Workout};
pub use workout_type::{UnknownWorkoutType, WorkoutType};
