// src/handlers/user.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::dtos::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::AppError;
use crate::extract::IdPath;
use crate::models::user::User;
use crate::state::AppState;

// GET /users - Newest first
#[instrument(skip(db_pool))]
pub async fn list_users(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id::INT8 AS id, name, email, role, status,
                created_at::TIMESTAMPTZ AS created_at,
                updated_at::TIMESTAMPTZ AS updated_at
         FROM users ORDER BY id DESC"
    )
    .fetch_all(&db_pool)
    .await
    .map_err(AppError::db("Database error"))?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// POST /users
#[instrument(skip(db_pool, payload))]
pub async fn create_user(
    State(AppState { db_pool }): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    // Password is stored exactly as supplied.
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, role, password, created_at)
         VALUES ($1, $2, $3, $4, NOW())
         RETURNING id::INT8 AS id, name, email, role, status,
                   created_at::TIMESTAMPTZ AS created_at,
                   updated_at::TIMESTAMPTZ AS updated_at"
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.role)
    .bind(&payload.password)
    .fetch_one(&db_pool)
    .await
    .map_err(AppError::db("Failed to create user"))?;

    info!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// PUT /users/:id - Overwrites name, email, role and status
#[instrument(skip(db_pool, payload))]
pub async fn update_user(
    State(AppState { db_pool }): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET name = $1, email = $2, role = $3, status = $4, updated_at = NOW()
         WHERE id = $5
         RETURNING id::INT8 AS id, name, email, role, status,
                   created_at::TIMESTAMPTZ AS created_at,
                   updated_at::TIMESTAMPTZ AS updated_at"
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.role)
    .bind(&payload.status)
    .bind(id)
    .fetch_optional(&db_pool)
    .await
    .map_err(AppError::db("Failed to update user"))?
    .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

// DELETE /users/:id
#[instrument(skip(db_pool))]
pub async fn delete_user(
    State(AppState { db_pool }): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await
        .map_err(AppError::db("Failed to delete user"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("User not found"));
    }

    info!(id, "User deleted");
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
