use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::user::{list_users, create_user, update_user, delete_user};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}
