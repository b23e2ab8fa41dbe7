use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Wraps application routes with documentation and cross-cutting middleware.
///
/// This sets up:
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
/// - the given routes, merged as-is (domain routers apply their own state)
/// - JSON 404 and 405 fallbacks
/// - request tracing, request timeout, security headers
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/products", handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &config.server);
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(server_config.request_timeout))
        .layer(middleware::from_fn(security_headers))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests drain first; `cleanup` (closing the database pool,
/// for example) then gets `server_config.shutdown_timeout` to finish.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     if let Err(e) = db.close().await {
///         tracing::error!("Failed to close database: {}", e);
///     }
/// };
///
/// create_production_app(router, &config.server, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_task = tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });
    signal_task.abort();

    let shutdown_timeout = server_config.shutdown_timeout;
    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(paths())]
    struct EmptyDoc;

    fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<EmptyDoc>(apis, &ServerConfig::default())
    }

    #[tokio::test]
    async fn test_routes_are_merged_at_root() {
        let response = router()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_405() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
