use std::fmt;

use serde::Serialize;

/// Request field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    OriginTz,
    DestTz,
    DepartureTime,
    FlightDurationHours,
}

impl Field {
    /// Wire name of the field, as it appears in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::OriginTz => "origin_tz",
            Field::DestTz => "dest_tz",
            Field::DepartureTime => "departure_time",
            Field::FlightDurationHours => "flight_duration_hours",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a schedule request.  Raised before any part of the
/// schedule is computed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: unknown timezone '{name}' (use IANA names like 'America/New_York')")]
    UnknownTimezone { field: Field, name: String },

    #[error("{field}: invalid time '{value}': {reason}")]
    InvalidTimeFormat {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("{field}: invalid duration {value}: {reason}")]
    InvalidDuration {
        field: Field,
        value: f64,
        reason: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::UnknownTimezone { field, .. }
            | ValidationError::InvalidTimeFormat { field, .. }
            | ValidationError::InvalidDuration { field, .. } => *field,
        }
    }

    /// Short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::UnknownTimezone { .. } => "unknown_timezone",
            ValidationError::InvalidTimeFormat { .. } => "invalid_time_format",
            ValidationError::InvalidDuration { .. } => "invalid_duration",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
