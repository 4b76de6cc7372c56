//! Repository implementations for the posts domain

pub mod feed;
pub mod posts;

use sqlx::PgPool;

pub use feed::{FeedEntry, FeedQuery, FeedRepository};
pub use posts::PostRepository;

/// Combined repository access for the posts domain
#[derive(Clone)]
pub struct PostsRepositories {
    pub posts: PostRepository,
    pub feed: FeedRepository,
}

impl PostsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool.clone()),
            feed: FeedRepository::new(pool),
        }
    }
}
