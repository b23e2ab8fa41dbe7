//! PostgreSQL plumbing shared by the services in this workspace
//!
//! - [`postgres`]: configuration, connection with retry, migrations, health probe
//! - [`repository`]: generic SeaORM CRUD helpers that domain repositories wrap
//! - [`common`]: error type and retry with exponential backoff
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "products_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod repository;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
pub use repository::BaseRepository;
