//! Query string extractor with JSON error bodies.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// [`Query`] wrapper whose rejection is an [`AppError::BadRequest`].
///
/// A query string that does not deserialize into `T` (a repeated key for a
/// single-valued field, for instance) answers `400` with the standard error
/// body instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::QueryParams;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Filter {
///     name: Option<String>,
/// }
///
/// async fn list(QueryParams(filter): QueryParams<Filter>) -> String {
///     filter.name.unwrap_or_default()
/// }
///
/// let app = Router::new().route("/products", get(list));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(QueryParams(params))
    }
}
