//! Products Domain
//!
//! Catalog of products backed by PostgreSQL through SeaORM, with an in-memory
//! repository for development and tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Category, JSON mapping
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{PgProductRepository, ProductService, handlers};
//!
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//!
//! let app = axum::Router::new().nest("/products", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, PRODUCTS_PATH};
pub use models::{Category, Product, ProductFilter, ProductQuery, parse_availability, parse_price};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
