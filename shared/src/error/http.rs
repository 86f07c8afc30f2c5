//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ZoneNotFound => StatusCode::NOT_FOUND,

            Self::ZoneNotClosed => StatusCode::CONFLICT,

            Self::DatabaseError | Self::MigrationFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation/business errors)
            Self::ValidationFailed
            | Self::InvalidFormat
            | Self::ZoneClosureInPast
            | Self::UnknownTimezone => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::ZoneNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::ZoneNotClosed.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::MigrationFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidFormat.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ZoneClosureInPast.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::UnknownTimezone.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
