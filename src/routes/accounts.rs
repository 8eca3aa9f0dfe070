use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::account::{list_accounts, create_account, update_account, delete_account};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/accounts", get(list_accounts).post(create_account))
        .route("/api/accounts/{id}", put(update_account).delete(delete_account))
}
