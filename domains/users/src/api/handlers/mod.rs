pub mod auth;
pub mod follows;
pub mod users;
