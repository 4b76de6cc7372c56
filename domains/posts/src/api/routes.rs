//! Route definitions for the posts domain API
//!
//! Every route here sits behind the token guard via the `AuthUser`
//! extractor in the handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{feed, posts};
use super::middleware::PostsState;

/// Posts CRUD routes
fn post_routes() -> Router<PostsState> {
    Router::new()
        .route("/v1/posts", post(posts::create_post))
        .route(
            "/v1/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
}

/// Aggregated feed route
fn feed_routes() -> Router<PostsState> {
    Router::new().route("/v1/users/feed", get(feed::get_feed))
}

/// Create all posts domain API routes
pub fn routes() -> Router<PostsState> {
    Router::new().merge(post_routes()).merge(feed_routes())
}
