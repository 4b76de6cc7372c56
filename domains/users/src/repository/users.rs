//! User repository

use crate::domain::entities::User;
use murmur_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user; duplicate username or email maps to Conflict
    pub async fn create(&self, username: &str, email: &str, password_hash: &str) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_sqlx(e, "Username or email already in use"))?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email (login lookup)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
