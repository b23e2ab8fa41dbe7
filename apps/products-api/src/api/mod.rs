//! API routes module

pub mod health;
pub mod products;

use axum::{Router, response::Html, routing::get};
use axum_helpers::health_router;
use domain_products::PRODUCTS_PATH;

use crate::state::AppState;

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Create all API routes
/// Note: create_router adds docs, the 404 fallback and middleware on top
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .nest(PRODUCTS_PATH, products::router(state))
        .merge(health_router())
        .merge(health::router(state.clone()))
}
