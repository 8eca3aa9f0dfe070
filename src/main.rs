// src/main.rs
use std::process::ExitCode;

use dotenvy::dotenv;
use ledger_backend::{config::ApiConfig, database, routes, server, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
    // .env first so RUST_LOG can come from it
    dotenv().ok();
    server::init_tracing();
    server::install_panic_hook();

    let config = match ApiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Create database pool
    let db_pool = database::create_pool(&config.database);
    let app_state = AppState::new(db_pool.clone());

    let app = routes::build_app(app_state, &config.cors);

    let (listener, addr) = match server::bind_listener(config.host, config.port).await {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind {}:{}", config.host, config.port);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("🚀 Server running on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await;

    db_pool.close().await;
    tracing::info!("Database pool closed");

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
