pub mod accounts;
pub mod dashboard;
pub mod users;

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::CorsOrigins;
use crate::error::handle_panic;
use crate::handlers::system::{health_check, root, route_not_found};
use crate::server::cors_layer;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(users::routes())
        .merge(accounts::routes())
        .merge(dashboard::routes())
}

/// The complete API application: routes, JSON 404s for unknown paths and
/// methods, panic recovery, request tracing and CORS.
pub fn build_app(state: AppState, cors: &CorsOrigins) -> Router {
    create_router()
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}
