pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error response carries:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product with ID - '7' not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::BadRequest(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Database(e) => map_db_error(e).0,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, message, details) = match self {
            AppError::Database(e) => {
                let (_, code) = map_db_error(&e);
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (code, code.default_message().to_string(), None)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (ErrorCode::JsonExtraction, e.body_text(), None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (ErrorCode::BadRequest, msg, None)
            }
            AppError::InvalidId(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", msg);
                (ErrorCode::InvalidId, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg, None)
            }
            AppError::UnsupportedMediaType(msg) => {
                tracing::info!(
                    error_code = ErrorCode::UnsupportedMediaType.code(),
                    "Unsupported media type: {}",
                    msg
                );
                (ErrorCode::UnsupportedMediaType, msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Maps a sea-orm error to a status and error code.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    match error {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound)
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseConnection)
        }
        DbErr::Exec(_) | DbErr::Query(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseUnhandled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Product with ID - '3' not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 1004);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Product with ID - '3' not found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_unsupported_media_type_is_415() {
        let response =
            AppError::UnsupportedMediaType("Content-Type must be application/json".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "UNSUPPORTED_MEDIA_TYPE");
        assert_eq!(body["message"], "Content-Type must be application/json");
    }

    #[tokio::test]
    async fn test_internal_database_details_are_hidden() {
        let response =
            AppError::Database(DbErr::Custom("password=secret".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_UNHANDLED");
        assert!(!body["message"].as_str().unwrap().contains("secret"));
    }

    #[tokio::test]
    async fn test_invalid_id_uses_its_own_code() {
        let response = AppError::InvalidId("Invalid ID: 'abc'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 1002);
        assert_eq!(body["error"], "INVALID_ID");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(DbErr::RecordNotUpdated).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database(DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into()))).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
