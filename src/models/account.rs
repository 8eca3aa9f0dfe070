use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A row of `chart_of_accounts`.
#[derive(Debug, FromRow)]
pub struct Account {
    pub id: i64,
    pub account_name: Option<String>,
    #[sqlx(rename = "type")]
    pub account_type: Option<String>,
    pub sub_type: Option<String>,
    pub account_code: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
