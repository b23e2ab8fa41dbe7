//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, QueryParams, StrictJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnsupportedMediaTypeResponse,
    },
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Category, Product, ProductFilter};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of the product routes, used to build `Location` headers
pub const PRODUCTS_PATH: &str = "/products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, Category, ProductFilter),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestIdResponse,
            UnsupportedMediaTypeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products, optionally filtered by name, category or availability
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    tracing::info!(?filter, "Request to list products");
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body(content = Product, content_type = "application/json"),
    responses(
        (status = 201, description = "Product created successfully", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    StrictJson(body): StrictJson<Value>,
) -> ProductResult<impl IntoResponse> {
    tracing::info!("Request to create a product");
    let product = service.create_product_from_json(&body).await?;

    let location = product
        .id
        .map(|id| format!("{}/{}", PRODUCTS_PATH, id))
        .unwrap_or_else(|| PRODUCTS_PATH.to_string());

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    tracing::info!(product_id = id, "Request for product");
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product's attributes
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = Product, content_type = "application/json"),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    StrictJson(body): StrictJson<Value>,
) -> ProductResult<Json<Product>> {
    tracing::info!(product_id = id, "Request to update product");
    let product = service.update_product(id, &body).await?;
    Ok(Json(product))
}

/// Delete a product. Unknown ids are not an error.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    tracing::info!(product_id = id, "Request to delete product");
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
