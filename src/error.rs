// src/error.rs
use std::any::Any;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Body returned for any failure the handlers did not anticipate.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum AppError {
    /// A store call failed. `message` is what the caller sees; the source
    /// error is only logged.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        source: sqlx::Error,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a store error with the operation-specific message, for use with
    /// `map_err`.
    pub fn db(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { message, source }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database { message, source } => {
                tracing::error!(error = ?source, "{message}");
                message.to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "Unhandled failure while serving request");
                GENERIC_FAILURE.to_string()
            }
            AppError::NotFound(msg) | AppError::Validation(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
        AppError::validation("Invalid id")
    }
}

/// Turns a handler panic into the generic 500 body. Installed through
/// `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "panic with non-string payload".to_string()
    };

    AppError::internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_error_hides_source() {
        let err = AppError::db("Failed to create user")(sqlx::Error::PoolTimedOut);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Failed to create user" }));
    }

    #[tokio::test]
    async fn not_found_and_validation_keep_message() {
        let response = AppError::not_found("Account not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Account not found" }));

        let response = AppError::validation("email is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "email is required" }));
    }

    #[tokio::test]
    async fn panic_payload_is_not_exposed() {
        let response = handle_panic(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": GENERIC_FAILURE }));

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(body_json(response).await, json!({ "error": GENERIC_FAILURE }));
    }
}
