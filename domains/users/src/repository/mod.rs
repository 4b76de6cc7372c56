//! Repository implementations for the users domain

pub mod follows;
pub mod users;

use sqlx::PgPool;

pub use follows::FollowRepository;
pub use users::UserRepository;

/// Combined repository access for the users domain
#[derive(Clone)]
pub struct UsersRepositories {
    pub users: UserRepository,
    pub follows: FollowRepository,
}

impl UsersRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            follows: FollowRepository::new(pool),
        }
    }
}
