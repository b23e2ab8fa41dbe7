use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter when `RUST_LOG` is unset.
fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,sqlx=warn,sea_orm=warn"
    } else {
        "debug,sqlx=warn,sea_orm=info,tower_http=debug,hyper=info"
    }
}

/// Install color-eyre with a project-standard configuration.
///
/// Call early in `main()`, before any fallible operation. Safe to call more
/// than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON lines, flattened events, no
///   module targets.
/// - **Development** (default): pretty, human-readable output.
///
/// Both register `tracing_error::ErrorLayer` so `eyre` reports carry span
/// traces. `RUST_LOG` overrides the default filter.
///
/// Calling it again after a subscriber is installed is a no-op, which keeps
/// tests that share a process happy.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
