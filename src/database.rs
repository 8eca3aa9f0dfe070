// src/database.rs
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

/// Builds the shared connection pool. Connections are opened on first use,
/// so the server starts even while the store is still coming up.
pub fn create_pool(config: &DatabaseConfig) -> PgPool {
    info!(
        host = config.options.get_host(),
        port = config.options.get_port(),
        database = config.options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "Creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.options.clone())
}
