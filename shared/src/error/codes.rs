//! Unified error codes for the booking services
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Zone errors
//! - 2xxx: Date/time errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that the frontend can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Zone ====================
    /// Zone not found
    ZoneNotFound = 1001,
    /// Zone is not closed
    ZoneNotClosed = 1002,
    /// Closure end lies in the past
    ZoneClosureInPast = 1003,

    // ==================== 2xxx: Time ====================
    /// Unknown timezone name
    UnknownTimezone = 2001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Schema migration failed
    MigrationFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",

            // Zone
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::ZoneNotClosed => "Zone is not closed",
            ErrorCode::ZoneClosureInPast => "Closure end time must be in the future",

            // Time
            ErrorCode::UnknownTimezone => "Unknown timezone",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::MigrationFailed => "Schema migration failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a u16 does not map to any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),

            // Zone
            1001 => Ok(ErrorCode::ZoneNotFound),
            1002 => Ok(ErrorCode::ZoneNotClosed),
            1003 => Ok(ErrorCode::ZoneClosureInPast),

            // Time
            2001 => Ok(ErrorCode::UnknownTimezone),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9006 => Ok(ErrorCode::MigrationFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
