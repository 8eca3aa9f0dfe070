use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A row of `users`. The password column is write-only and never selected.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
