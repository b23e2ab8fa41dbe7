//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the product store failed",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid product data",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "BAD_REQUEST",
        "message": "Invalid type for boolean [available]: string"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid ID: 'abc'"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Product with ID - '0' not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unsupported Media Type - body must be application/json",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "UNSUPPORTED_MEDIA_TYPE",
        "message": "Content-Type must be application/json"
    })
)]
pub struct UnsupportedMediaTypeResponse(pub ErrorResponse);
