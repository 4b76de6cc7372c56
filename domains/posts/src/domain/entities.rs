//! Domain entities for the Murmur posts domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Post entity
///
/// `version` supports optimistic concurrency on updates: a writer must
/// present the version it read, and a stale version is a conflict.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Whether the given user authored this post
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(user_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            user_id,
            title: "hello".to_string(),
            content: "world".to_string(),
            tags: vec!["intro".to_string()],
            version: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_authorship_check() {
        let author = Uuid::new_v4();
        let post = sample_post(author);

        assert!(post.is_authored_by(author));
        assert!(!post.is_authored_by(Uuid::new_v4()));
    }
}
