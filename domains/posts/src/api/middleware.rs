//! Posts domain state and auth backend integration

use crate::PostsRepositories;
use axum::extract::FromRef;
use murmur_auth::AuthBackend;

/// Application state for the posts domain
#[derive(Clone)]
pub struct PostsState {
    pub repos: PostsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<PostsState> for AuthBackend {
    fn from_ref(state: &PostsState) -> Self {
        state.auth.clone()
    }
}
