//! Authentication core for the Murmur API
//!
//! Provides token issuance and verification, operator credential checks,
//! and axum extractors that work with any router state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod basic;
mod claims;
mod config;
mod error;
mod extractors;
mod token;
mod types;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AuthUser, OperatorAuth};
pub use types::AuthIdentity;
