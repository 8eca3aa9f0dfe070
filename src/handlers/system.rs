use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::error::AppError;

pub async fn root() -> &'static str {
    "Backend is running 🚀"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}
