//! User profile API handlers
//!
//! Implements:
//! - GET /v1/users/{id} — fetch a user's public profile

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::api::handlers::auth::UserResponse;
use crate::api::middleware::UsersState;
use murmur_auth::AuthUser;
use murmur_common::{Error, Result};

/// GET /v1/users/{id} — fetch a user's public profile
pub async fn get_user(
    AuthUser(_identity): AuthUser,
    State(state): State<UsersState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}
