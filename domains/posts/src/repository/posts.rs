//! Post repository

use crate::domain::entities::Post;
use murmur_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post for a user
    pub async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<Post> {
        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (id, user_id, title, content, tags, version, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 1, NOW(), NOW())
            RETURNING id, user_id, title, content, tags, version, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Get post by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let post: Option<Post> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, content, tags, version, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Update a post with optimistic concurrency.
    ///
    /// Returns `None` when the row exists but `expected_version` is stale
    /// (or the row vanished between read and write); callers map that to
    /// a conflict.
    pub async fn update(
        &self,
        id: Uuid,
        expected_version: i32,
        title: Option<&str>,
        content: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<Option<Post>> {
        let post: Option<Post> = sqlx::query_as(
            r#"
            UPDATE posts SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                tags = COALESCE($5, tags),
                version = version + 1,
                updated_at = NOW()
            WHERE id = $1 AND version = $2
            RETURNING id, user_id, title, content, tags, version, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(expected_version)
        .bind(title)
        .bind(content)
        .bind(tags)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
