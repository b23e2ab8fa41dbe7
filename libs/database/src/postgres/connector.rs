use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{RetryConfig, retry_with_backoff};

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect once using a PostgresConfig
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    info!(url = %config.redacted_url(), "Connecting to PostgreSQL");
    connect_with_options(config.into_connect_options()).await
}

/// Connect from config, retrying with exponential backoff
///
/// Startup often races the database container; `None` uses
/// [`RetryConfig::default`].
///
/// # Example
/// ```ignore
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    info!(url = %config.redacted_url(), "Connecting to PostgreSQL");
    let options = config.into_connect_options();
    let retry_config = retry_config.unwrap_or_default();

    retry_with_backoff(|| connect_with_options(options.clone()), &retry_config).await
}

/// Run database migrations using the provided Migrator
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::postgres::run_migrations;
///
/// run_migrations::<Migrator>(&db, "products_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
