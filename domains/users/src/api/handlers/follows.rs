//! Follow/unfollow API handlers
//!
//! Implements:
//! - PUT /v1/users/{id}/follow — acting user follows {id}
//! - PUT /v1/users/{id}/unfollow — acting user unfollows {id}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::middleware::UsersState;
use murmur_auth::AuthUser;
use murmur_common::{Error, Result};

/// PUT /v1/users/{id}/follow
pub async fn follow_user(
    AuthUser(identity): AuthUser,
    State(state): State<UsersState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode> {
    if identity.id == user_id {
        return Err(Error::Validation("Cannot follow yourself".to_string()));
    }

    // Target must exist; the FK alone would surface as a 500
    state
        .repos
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    state.repos.follows.follow(identity.id, user_id).await?;

    tracing::info!(follower_id = %identity.id, followed_id = %user_id, "User followed");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v1/users/{id}/unfollow
pub async fn unfollow_user(
    AuthUser(identity): AuthUser,
    State(state): State<UsersState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode> {
    state.repos.follows.unfollow(identity.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
