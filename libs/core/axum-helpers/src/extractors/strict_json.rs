//! JSON body extractor that insists on an exact `application/json` content type.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

/// The only content type accepted for request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON extractor that rejects any `Content-Type` other than `application/json`.
///
/// A missing or different header (parameters such as `; charset=utf-8`
/// included) yields `415`. A malformed body yields the status of the
/// underlying [`axum::extract::rejection::JsonRejection`].
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::StrictJson;
/// use serde_json::Value;
///
/// async fn create(StrictJson(body): StrictJson<Value>) -> String {
///     body.to_string()
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        if content_type != Some(JSON_CONTENT_TYPE) {
            tracing::debug!(?content_type, "Rejected request body content type");
            return Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {}",
                JSON_CONTENT_TYPE
            )));
        }

        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(StrictJson(data))
    }
}
