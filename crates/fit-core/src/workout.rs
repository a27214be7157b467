//! Workout variants and their distance, speed, and calorie formulas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::summary::TrainingSummary;
use crate::workout_type::WorkoutType;

/// Distance covered by one step, in kilometers (running, walking).
pub const STEP_LEN_KM: f64 = 0.65;

/// Distance covered by one stroke, in kilometers.
///
/// The swimming payload still carries a stroke count, but swimming distance
/// is measured from the pool length and lap count, so this calibration is
/// not part of any formula below.
pub const STROKE_LEN_KM: f64 = 1.38;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

// Running calorie coefficients.
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

// Walking calorie coefficients.
const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

// Swimming calorie coefficients.
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Numeric faults surfaced by the workout computations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ComputeError {
    /// Mean speed is undefined for a zero-length workout.
    #[error("workout duration is zero, mean speed is undefined")]
    DivisionByZero,
}

/// One recorded workout, dispatched by activity type.
///
/// A closed set of variants: each carries exactly the fields its formulas
/// need, so a workout without a calorie formula cannot be constructed.
/// All computations are pure reads; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        /// Step count from the sensor.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        /// Step count from the sensor.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        /// Stroke count from the sensor.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    /// The activity type of this workout.
    #[must_use]
    pub const fn kind(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::Walking { .. } => WorkoutType::Walking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    const fn duration_h(&self) -> f64 {
        match *self {
            Self::Running { duration_h, .. }
            | Self::Walking { duration_h, .. }
            | Self::Swimming { duration_h, .. } => duration_h,
        }
    }

    /// Distance covered, in kilometers.
    ///
    /// Step-based for running and walking; pool length times lap count for
    /// swimming, whose unit of motion is laps rather than the stroke count.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match *self {
            Self::Running { action, .. } | Self::Walking { action, .. } => {
                f64::from(action) * STEP_LEN_KM / M_IN_KM
            }
            Self::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * f64::from(pool_laps) / M_IN_KM,
        }
    }

    /// Mean speed over the workout, in km/h.
    ///
    /// A zero duration is reported as [`ComputeError::DivisionByZero`]
    /// rather than a silent infinity.
    #[expect(
        clippy::float_cmp,
        reason = "exact zero is the defined fault condition"
    )]
    pub fn mean_speed_kmh(&self) -> Result<f64, ComputeError> {
        let duration_h = self.duration_h();
        if duration_h == 0.0 {
            return Err(ComputeError::DivisionByZero);
        }
        Ok(self.distance_km() / duration_h)
    }

    /// Calories burned, per the activity-specific formula.
    ///
    /// The zero-duration fault from the mean-speed term propagates here
    /// unchanged.
    pub fn spent_calories(&self) -> Result<f64, ComputeError> {
        let speed = self.mean_speed_kmh()?;
        let calories = match *self {
            Self::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT)
                    * (weight_kg / M_IN_KM * duration_h * MIN_IN_H)
            }
            Self::Walking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed_ms = speed * KMH_IN_MSEC;
                (WLK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_ms.powi(2) / height_cm * CM_IN_M
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Self::Swimming {
                duration_h,
                weight_kg,
                ..
            } => (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight_kg * duration_h,
        };
        Ok(calories)
    }

    /// Builds the immutable summary record for this workout.
    pub fn summarize(&self) -> Result<TrainingSummary, ComputeError> {
        Ok(TrainingSummary::new(
            self.kind().label(),
            self.duration_h(),
            self.distance_km(),
            self.mean_speed_kmh()?,
            self.spent_calories()?,
        ))
    }
}
