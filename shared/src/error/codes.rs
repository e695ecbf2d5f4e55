//! Error codes for the civic issue tracker
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Report errors
//! - 2xxx: Geo / map errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so a rendering layer in any language can
/// switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Report ====================
    /// Issue not found
    IssueNotFound = 1001,
    /// Status is not one of reported / in-progress / resolved
    InvalidStatus = 1002,
    /// Urgency is not one of low / medium / high / critical
    InvalidUrgency = 1003,
    /// Category key is empty or malformed
    InvalidCategory = 1004,
    /// Progress percentage above 100
    ProgressOutOfRange = 1005,

    // ==================== 2xxx: Geo ====================
    /// Coordinate is NaN or infinite
    InvalidCoordinates = 2001,
    /// Latitude outside [-90, 90]
    LatitudeOutOfRange = 2002,
    /// Longitude outside [-180, 180]
    LongitudeOutOfRange = 2003,
    /// Zoom level outside the tile range
    InvalidZoom = 2004,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9001,
    /// Serialization error
    SerializationError = 9002,
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

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",

            // Report
            ErrorCode::IssueNotFound => "Issue not found",
            ErrorCode::InvalidStatus => "Invalid issue status",
            ErrorCode::InvalidUrgency => "Invalid urgency level",
            ErrorCode::InvalidCategory => "Invalid category",
            ErrorCode::ProgressOutOfRange => "Progress must be between 0 and 100",

            // Geo
            ErrorCode::InvalidCoordinates => "Coordinates must be finite numbers",
            ErrorCode::LatitudeOutOfRange => "Latitude must be between -90 and 90",
            ErrorCode::LongitudeOutOfRange => "Longitude must be between -180 and 180",
            ErrorCode::InvalidZoom => "Zoom level is out of range",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            7 => Ok(ErrorCode::RequiredField),

            // Report
            1001 => Ok(ErrorCode::IssueNotFound),
            1002 => Ok(ErrorCode::InvalidStatus),
            1003 => Ok(ErrorCode::InvalidUrgency),
            1004 => Ok(ErrorCode::InvalidCategory),
            1005 => Ok(ErrorCode::ProgressOutOfRange),

            // Geo
            2001 => Ok(ErrorCode::InvalidCoordinates),
            2002 => Ok(ErrorCode::LatitudeOutOfRange),
            2003 => Ok(ErrorCode::LongitudeOutOfRange),
            2004 => Ok(ErrorCode::InvalidZoom),

            // System
            9001 => Ok(ErrorCode::ConfigError),
            9002 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
