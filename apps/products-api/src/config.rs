//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URI falls back to local Postgres
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
