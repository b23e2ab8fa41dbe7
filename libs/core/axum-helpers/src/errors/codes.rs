//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "INVALID_ID")
//! - Integer code for logging and monitoring (e.g., 1002)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::UnsupportedMediaType;
//! assert_eq!(code.as_str(), "UNSUPPORTED_MEDIA_TYPE");
//! assert_eq!(code.code(), 1006);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Path parameter is not a valid identifier
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request could not be understood
    BadRequest,

    /// Request body is not `application/json`
    UnsupportedMediaType,

    /// HTTP method not supported on this route
    MethodNotAllowed,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,

    /// Database record not found
    DatabaseNotFound,

    /// Database connection could not be acquired
    DatabaseConnection,

    /// Unhandled database error
    DatabaseUnhandled,
}

impl ErrorCode {
    /// String representation for client consumption.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::BadRequest => 1005,
            Self::UnsupportedMediaType => 1006,
            Self::MethodNotAllowed => 1007,

            Self::DatabaseError => 2001,
            Self::DatabaseNotFound => 2002,
            Self::DatabaseConnection => 2003,
            Self::DatabaseUnhandled => 2099,
        }
    }

    /// Default user-facing message. Handlers usually override it.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidId => "Invalid ID format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::UnsupportedMediaType => "Content-Type must be application/json",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseNotFound => "Database record not found",
            Self::DatabaseConnection => "Database connection unavailable",
            Self::DatabaseUnhandled => "Unhandled database error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(
            ErrorCode::UnsupportedMediaType.as_str(),
            "UNSUPPORTED_MEDIA_TYPE"
        );
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::InvalidId.code(), 1002);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
        assert_eq!(ErrorCode::DatabaseUnhandled.code(), 2099);
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let code = ErrorCode::InvalidId;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"UNSUPPORTED_MEDIA_TYPE\"").unwrap();
        assert_eq!(code, ErrorCode::UnsupportedMediaType);
    }
}
