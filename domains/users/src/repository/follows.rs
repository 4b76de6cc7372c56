//! Follow relation repository

use murmur_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record that `follower_id` follows `followed_id`.
    /// Following the same user twice maps to Conflict.
    pub async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id, created_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::from_sqlx(e, "Already following this user"))?;

        Ok(())
    }

    /// Remove the relation; deleting a non-existent relation is a no-op.
    pub async fn unfollow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
