//! Aggregated feed query
//!
//! Cross-domain read: joins posts with the users and follows tables owned
//! by the users domain, limited to the columns the feed needs.

use chrono::{DateTime, Utc};
use murmur_common::Result;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// One feed row: a post plus its author's username
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FeedEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Filters applied to the feed, already normalized by the handler
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub search: Option<String>,
    pub tags: Option<Vec<String>>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Clone)]
pub struct FeedRepository {
    pool: PgPool,
}

impl FeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Posts authored by `user_id` or by anyone they follow, newest first.
    pub async fn feed_for(&self, user_id: Uuid, query: &FeedQuery) -> Result<Vec<FeedEntry>> {
        let entries: Vec<FeedEntry> = sqlx::query_as(
            r#"
            SELECT p.id, p.user_id, u.username AS author, p.title, p.content,
                   p.tags, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE (p.user_id = $1 OR p.user_id IN (
                       SELECT followed_id FROM follows WHERE follower_id = $1))
              AND ($2::text IS NULL
                   OR p.title ILIKE '%' || $2 || '%'
                   OR p.content ILIKE '%' || $2 || '%')
              AND ($3::text[] IS NULL OR p.tags @> $3)
            ORDER BY p.created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(user_id)
        .bind(query.search.as_deref())
        .bind(query.tags.as_deref())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
