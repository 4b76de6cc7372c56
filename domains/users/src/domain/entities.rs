//! Domain entities for the Murmur users domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User entity
///
/// The password hash never leaves the process: it is excluded from
/// serialization and from all response DTOs.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Follow relation: `follower_id` follows `followed_id`
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Follow {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
}
