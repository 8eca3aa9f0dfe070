use axum::{routing::get, Router};
use crate::handlers::dashboard::get_stats;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/dashboard/stats", get(get_stats))
}
