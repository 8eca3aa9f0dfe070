use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::require;
use crate::error::AppError;
use crate::models::account::Account;

/// Body for both create and update: an update overwrites every field, so the
/// two share one shape.
#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    pub account_name: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub sub_type: Option<String>,
    pub account_code: Option<String>,
    pub description: Option<String>,
}

impl AccountRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.account_name, "account_name")?;
        require(&self.account_type, "type")?;
        require(&self.account_code, "account_code")
    }
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub account_name: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub sub_type: Option<String>,
    pub account_code: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_name: account.account_name,
            account_type: account.account_type,
            sub_type: account.sub_type,
            account_code: account.account_code,
            description: account.description,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
