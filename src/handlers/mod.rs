pub mod account;
pub mod dashboard;
pub mod system;
pub mod user;
