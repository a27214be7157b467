//! The immutable summary record for a completed workout.

use std::fmt;

/// Computed metrics for one workout.
///
/// Built by [`crate::Workout::summarize`] and read-only afterwards; every
/// numeric field is derived from the raw sensor payload, never set
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    label: &'static str,
    duration_h: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl TrainingSummary {
    pub(crate) const fn new(
        label: &'static str,
        duration_h: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            label,
            duration_h,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Display name of the activity variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Workout duration in hours.
    #[must_use]
    pub const fn duration_h(&self) -> f64 {
        self.duration_h
    }

    /// Distance covered in kilometers.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Mean speed in km/h.
    #[must_use]
    pub const fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned in kcal.
    #[must_use]
    pub const fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }
}

impl fmt::Display for TrainingSummary {
    /// Renders the fixed report template.
    ///
    /// All four numerics use `{:.3}`: the f64 is rounded to the nearest
    /// 3-decimal string, which matches 3-decimal fixed formatting of a
    /// 64-bit float in the reference output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.label, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
