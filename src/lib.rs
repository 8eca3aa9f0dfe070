//! Ledger backend: a JSON CRUD API over users and a chart of accounts,
//! plus a standalone static server for the single-page frontend.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod static_files;

pub use config::{ApiConfig, StaticConfig};
pub use error::AppError;
pub use state::AppState;
