//! Feed API handler
//!
//! Implements:
//! - GET /v1/users/feed — posts by the acting user and everyone they follow

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::middleware::PostsState;
use crate::repository::{FeedEntry, FeedQuery};
use murmur_auth::AuthUser;
use murmur_common::{Pagination, Result};

/// Content filters accepted by the feed endpoint.
///
/// `tags` is comma-separated; empty segments are dropped.
#[derive(Debug, Deserialize)]
pub struct FeedFilters {
    pub search: Option<String>,
    pub tags: Option<String>,
}

impl FeedFilters {
    fn into_query(self, pagination: Pagination) -> FeedQuery {
        let tags = self.tags.and_then(|raw| {
            let parsed: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        });

        FeedQuery {
            search: self.search.filter(|s| !s.is_empty()),
            tags,
            limit: pagination.limit(),
            offset: pagination.offset(),
        }
    }
}

/// GET /v1/users/feed
pub async fn get_feed(
    AuthUser(identity): AuthUser,
    State(state): State<PostsState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<FeedFilters>,
) -> Result<Json<Vec<FeedEntry>>> {
    let query = filters.into_query(pagination);
    let entries = state.repos.feed.feed_for(identity.id, &query).await?;

    Ok(Json(entries))
}
