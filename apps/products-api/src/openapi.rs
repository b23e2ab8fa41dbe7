//! OpenAPI documentation configuration

use axum_helpers::server::HealthResponse;
use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog REST API backed by PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(axum_helpers::server::health::health_handler),
    components(schemas(HealthResponse)),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Health", description = "Liveness and readiness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_paths_are_nested_under_products() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/products"));
        assert!(paths.iter().any(|p| *p == "/products/{id}"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }
}
