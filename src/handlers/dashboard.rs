use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::dashboard::DashboardStats;
use crate::error::AppError;
use crate::state::AppState;

// GET /api/dashboard/stats - Both counts run concurrently; either failing fails the request
#[instrument(skip(db_pool))]
pub async fn get_stats(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users").fetch_one(&db_pool);
    let accounts =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chart_of_accounts").fetch_one(&db_pool);

    let (total_users, total_accounts) = tokio::try_join!(users, accounts)
        .map_err(AppError::db("Failed to fetch dashboard stats"))?;

    Ok(Json(DashboardStats::from_counts(total_users, total_accounts)))
}
