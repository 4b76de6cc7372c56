//! Route definitions for the users domain API
//!
//! The guard table is static: registration and login are unauthenticated,
//! everything else under /v1/users requires a bearer token (enforced by
//! the `AuthUser` extractor in each handler).

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{auth, follows, users};
use super::middleware::UsersState;

/// Registration and login routes (no guard)
fn authentication_routes() -> Router<UsersState> {
    Router::new()
        .route("/v1/authentication/user", post(auth::register_user))
        .route("/v1/authentication/token", post(auth::create_token))
}

/// Profile and follow routes (token guard)
fn user_routes() -> Router<UsersState> {
    Router::new()
        .route("/v1/users/{id}", get(users::get_user))
        .route("/v1/users/{id}/follow", put(follows::follow_user))
        .route("/v1/users/{id}/unfollow", put(follows::unfollow_user))
}

/// Create all users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .merge(authentication_routes())
        .merge(user_routes())
}
