//! Workout type enum as the single source of truth for sensor tag strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical activity types recognized by the sensor protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,
    Running,
    Walking,
}

impl WorkoutType {
    /// Display name used in the summary line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Number of positional values the sensor payload must carry.
    #[must_use]
    pub const fn expected_args(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }

    /// Canonical sensor tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            _ => Err(UnknownWorkoutType(s.to_string())),
        }
    }
}

impl Serialize for WorkoutType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unrecognized sensor tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workout type: {0}")]
pub struct UnknownWorkoutType(String);
