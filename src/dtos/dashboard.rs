use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_accounts: i64,
    // Not tracked yet; always 0.
    pub total_revenue: i64,
    pub total_expenses: i64,
}

impl DashboardStats {
    pub fn from_counts(total_users: i64, total_accounts: i64) -> Self {
        Self {
            total_users,
            total_accounts,
            total_revenue: 0,
            total_expenses: 0,
        }
    }
}
