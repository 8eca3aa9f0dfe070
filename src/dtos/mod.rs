pub mod account;
pub mod dashboard;
pub mod user;

use crate::error::AppError;

/// Rejects a missing or blank required field with a 400.
pub(crate) fn require(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}
