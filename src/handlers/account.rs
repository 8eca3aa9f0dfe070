// src/handlers/account.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::dtos::account::{AccountRequest, AccountResponse};
use crate::error::AppError;
use crate::extract::IdPath;
use crate::models::account::Account;
use crate::state::AppState;

// GET /api/accounts - Ordered by account code
#[instrument(skip(db_pool))]
pub async fn list_accounts(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        "SELECT id::INT8 AS id, account_name, type, sub_type, account_code, description,
                created_at::TIMESTAMPTZ AS created_at,
                updated_at::TIMESTAMPTZ AS updated_at
         FROM chart_of_accounts ORDER BY account_code"
    )
    .fetch_all(&db_pool)
    .await
    .map_err(AppError::db("Database error"))?;

    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

// POST /api/accounts
#[instrument(skip(db_pool, payload))]
pub async fn create_account(
    State(AppState { db_pool }): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    payload.validate()?;

    let account = sqlx::query_as::<_, Account>(
        "INSERT INTO chart_of_accounts (account_name, type, sub_type, account_code, description, created_at)
         VALUES ($1, $2, $3, $4, $5, NOW())
         RETURNING id::INT8 AS id, account_name, type, sub_type, account_code, description,
                   created_at::TIMESTAMPTZ AS created_at,
                   updated_at::TIMESTAMPTZ AS updated_at"
    )
    .bind(&payload.account_name)
    .bind(&payload.account_type)
    .bind(&payload.sub_type)
    .bind(&payload.account_code)
    .bind(&payload.description)
    .fetch_one(&db_pool)
    .await
    .map_err(AppError::db("Failed to create account"))?;

    info!(id = account.id, code = ?account.account_code, "Account created");
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

// PUT /api/accounts/:id - Overwrites every account field
#[instrument(skip(db_pool, payload))]
pub async fn update_account(
    State(AppState { db_pool }): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<AccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    payload.validate()?;

    let account = sqlx::query_as::<_, Account>(
        "UPDATE chart_of_accounts SET account_name = $1, type = $2, sub_type = $3,
                account_code = $4, description = $5, updated_at = NOW()
         WHERE id = $6
         RETURNING id::INT8 AS id, account_name, type, sub_type, account_code, description,
                   created_at::TIMESTAMPTZ AS created_at,
                   updated_at::TIMESTAMPTZ AS updated_at"
    )
    .bind(&payload.account_name)
    .bind(&payload.account_type)
    .bind(&payload.sub_type)
    .bind(&payload.account_code)
    .bind(&payload.description)
    .bind(id)
    .fetch_optional(&db_pool)
    .await
    .map_err(AppError::db("Failed to update account"))?
    .ok_or_else(|| AppError::not_found("Account not found"))?;

    Ok(Json(AccountResponse::from(account)))
}

// DELETE /api/accounts/:id
#[instrument(skip(db_pool))]
pub async fn delete_account(
    State(AppState { db_pool }): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM chart_of_accounts WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await
        .map_err(AppError::db("Failed to delete account"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Account not found"));
    }

    info!(id, "Account deleted");
    Ok(Json(json!({ "message": "Account deleted successfully" })))
}
