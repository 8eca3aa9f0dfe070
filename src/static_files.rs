// src/static_files.rs
use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::StaticConfig;

/// Serves the frontend bundle. Any path that is not a file on disk gets the
/// entry document with a 200, so the client-side router can take over.
pub fn static_router(config: &StaticConfig) -> Router {
    let index = config.index_path();
    if !index.is_file() {
        warn!(path = %index.display(), "Entry document not found; fallback requests will fail");
    }
    info!(root = %config.root.display(), index = %index.display(), "Serving static files");

    let serve = ServeDir::new(&config.root).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(serve)
        .layer(TraceLayer::new_for_http())
}
