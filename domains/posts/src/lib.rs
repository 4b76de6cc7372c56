//! Posts domain: posts CRUD and the aggregated follow feed

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{FeedEntry, FeedQuery, FeedRepository, PostRepository, PostsRepositories};

// Re-export API types
pub use api::routes;
pub use api::PostsState;
