use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with ID - '{0}' not found")]
    NotFound(i32),

    #[error("{0}")]
    DataValidation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product with ID - '{}' not found", id))
            }
            ProductError::DataValidation(msg) => AppError::BadRequest(msg),
            ProductError::Database(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = ProductError::NotFound(42);
        assert_eq!(err.to_string(), "Product with ID - '42' not found");
    }

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ProductError::NotFound(1), StatusCode::NOT_FOUND),
            (
                ProductError::DataValidation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductError::Database(DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ProductError::Database(DbErr::RecordNotUpdated),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_db_err_maps_to_database_error() {
        let err: ProductError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, ProductError::Database(DbErr::Custom(msg)) if msg == "connection reset"));
    }

    #[tokio::test]
    async fn test_database_error_body_hides_driver_text() {
        let err = ProductError::Database(DbErr::Custom("numeric field overflow; password=secret".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "DATABASE_UNHANDLED");
        assert_eq!(body["message"], "Unhandled database error");
        assert!(!body.to_string().contains("secret"));
    }
}
