//! Decoding raw sensor packages into workouts.

use thiserror::Error;

use crate::workout::Workout;
use crate::workout_type::{UnknownWorkoutType, WorkoutType};

/// Errors from decoding a sensor package.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PackageError {
    /// The tag is not one of the recognized sensor tags.
    #[error(transparent)]
    UnknownWorkoutType(#[from] UnknownWorkoutType),

    /// The payload length does not match the workout type's parameter list.
    #[error("{kind} package expects {expected} values, got {got}")]
    ArityMismatch {
        kind: WorkoutType,
        expected: usize,
        got: usize,
    },
}

/// Builds a workout from a parsed tag and its positional payload.
///
/// Payload order is fixed by the sensor protocol: action count, duration in
/// hours, weight in kilograms, then the variant extras (height in cm for
/// walking; pool length in meters and lap count for swimming). Either a
/// fully valid workout is returned or nothing is constructed.
pub fn build_workout(kind: WorkoutType, data: &[f64]) -> Result<Workout, PackageError> {
    let expected = kind.expected_args();
    if data.len() != expected {
        return Err(PackageError::ArityMismatch {
            kind,
            expected,
            got: data.len(),
        });
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sensor counts arrive as whole numbers inside a float payload"
    )]
    let workout = match kind {
        WorkoutType::Running => Workout::Running {
            action: data[0] as u32,
            duration_h: data[1],
            weight_kg: data[2],
        },
        WorkoutType::Walking => Workout::Walking {
            action: data[0] as u32,
            duration_h: data[1],
            weight_kg: data[2],
            height_cm: data[3],
        },
        WorkoutType::Swimming => Workout::Swimming {
            action: data[0] as u32,
            duration_h: data[1],
            weight_kg: data[2],
            pool_length_m: data[3],
            pool_laps: data[4] as u32,
        },
    };

    tracing::debug!(kind = %kind, values = data.len(), "decoded sensor package");
    Ok(workout)
}

/// Reads one sensor package: a tag string plus its flat numeric payload.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let kind: WorkoutType = tag.parse()?;
    build_workout(kind, data)
}
