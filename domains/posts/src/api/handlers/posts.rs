//! Posts CRUD API handlers
//!
//! Implements:
//! - POST /v1/posts — create a post
//! - GET /v1/posts/{id} — fetch a post
//! - PATCH /v1/posts/{id} — partial update with optimistic concurrency
//! - DELETE /v1/posts/{id} — delete a post
//!
//! Updates and deletes are author-only; everything here sits behind the
//! token guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::PostsState;
use crate::domain::entities::Post;
use murmur_auth::AuthUser;
use murmur_common::{Error, Result, ValidatedJson};

/// Response shape for post operations
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            tags: post.tags,
            version: post.version,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Request for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(min = 1, max = 1000))]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request for updating a post.
///
/// `version` is the version the client read; a stale value conflicts.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 1000))]
    pub content: Option<String>,

    pub tags: Option<Vec<String>>,

    pub version: i32,
}

/// POST /v1/posts — create a post
pub async fn create_post(
    AuthUser(identity): AuthUser,
    State(state): State<PostsState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse> {
    let post = state
        .repos
        .posts
        .create(identity.id, &request.title, &request.content, &request.tags)
        .await?;

    tracing::info!(post_id = %post.id, user_id = %identity.id, "Post created");

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// GET /v1/posts/{id} — fetch a post
pub async fn get_post(
    AuthUser(_identity): AuthUser,
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>> {
    let post = state
        .repos
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    Ok(Json(PostResponse::from(post)))
}

/// PATCH /v1/posts/{id} — partial update, author only
pub async fn update_post(
    AuthUser(identity): AuthUser,
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>> {
    let post = state
        .repos
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    if !post.is_authored_by(identity.id) {
        return Err(Error::Authorization(
            "Only the author can update a post".to_string(),
        ));
    }

    let updated = state
        .repos
        .posts
        .update(
            post_id,
            request.version,
            request.title.as_deref(),
            request.content.as_deref(),
            request.tags.as_deref(),
        )
        .await?
        .ok_or_else(|| Error::Conflict("Post was modified concurrently".to_string()))?;

    Ok(Json(PostResponse::from(updated)))
}

/// DELETE /v1/posts/{id} — delete a post, author only
pub async fn delete_post(
    AuthUser(identity): AuthUser,
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode> {
    let post = state
        .repos
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    if !post.is_authored_by(identity.id) {
        return Err(Error::Authorization(
            "Only the author can delete a post".to_string(),
        ));
    }

    state.repos.posts.delete(post_id).await?;

    tracing::info!(post_id = %post_id, user_id = %identity.id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
