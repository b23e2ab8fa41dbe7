//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router()), &config.server);
//! create_production_app(router, &config.server, async move { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{
    HealthCheckFuture, HealthResponse, health_handler, health_router, run_health_checks,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
