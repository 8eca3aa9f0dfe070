// src/bin/ledger-static.rs
use std::process::ExitCode;

use dotenvy::dotenv;
use ledger_backend::{config::StaticConfig, server, static_files};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    server::init_tracing();
    server::install_panic_hook();

    let config = match StaticConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = static_files::static_router(&config);

    let (listener, addr) = match server::bind_listener(config.host, config.port).await {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind {}:{}", config.host, config.port);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("🌐 Frontend server running on http://{}", addr);

    match axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
