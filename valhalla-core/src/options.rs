//! Request options shared by several endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance units for narrative and lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Kilometers (the service default).
    #[serde(alias = "km")]
    Kilometers,
    /// Miles.
    #[serde(alias = "mi")]
    Miles,
}

/// How much narrative the route response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionsType {
    /// Shape and summary only.
    None,
    /// Maneuvers without instructions.
    Maneuvers,
    /// Maneuvers with narrative instructions (the service default).
    Instructions,
}

/// Meaning of a [`DateTime`] value, encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DateTimeType {
    /// Leave now; `value` is ignored.
    Current,
    /// Depart at `value`.
    DepartAt,
    /// Arrive by `value`.
    ArriveBy,
    /// Time-invariant: `value` applies at every location.
    Invariant,
}

/// Raised when the wire value does not name a [`DateTimeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown date_time type {0}")]
pub struct UnknownDateTimeType(pub u8);

impl TryFrom<u8> for DateTimeType {
    type Error = UnknownDateTimeType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Current),
            1 => Ok(Self::DepartAt),
            2 => Ok(Self::ArriveBy),
            3 => Ok(Self::Invariant),
            other => Err(UnknownDateTimeType(other)),
        }
    }
}

impl From<DateTimeType> for u8 {
    fn from(kind: DateTimeType) -> Self {
        match kind {
            DateTimeType::Current => 0,
            DateTimeType::DepartAt => 1,
            DateTimeType::ArriveBy => 2,
            DateTimeType::Invariant => 3,
        }
    }
}

/// Departure or arrival time for time-dependent routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    /// Meaning of `value`.
    #[serde(rename = "type")]
    pub kind: DateTimeType,
    /// Local time as `YYYY-MM-DDThh:mm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DateTime {
    /// Depart now.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            kind: DateTimeType::Current,
            value: None,
        }
    }

    /// Depart at the given local time.
    #[must_use]
    pub fn depart_at(value: impl Into<String>) -> Self {
        Self {
            kind: DateTimeType::DepartAt,
            value: Some(value.into()),
        }
    }

    /// Arrive by the given local time.
    #[must_use]
    pub fn arrive_by(value: impl Into<String>) -> Self {
        Self {
            kind: DateTimeType::ArriveBy,
            value: Some(value.into()),
        }
    }
}
