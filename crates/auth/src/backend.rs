//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the identity-resolution query.
//! Uses runtime `sqlx::query_as` so the crate builds without a live
//! database.

use sqlx::PgPool;
use uuid::Uuid;

use crate::basic::verify_basic_credentials;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token::{issue_token, verify_token};
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Router states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Mint a signed token for a user; called by the login handler,
    /// independent of the guard chain.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        issue_token(&user_id.to_string(), &self.config)
    }

    /// Find the identity behind a user ID (cross-domain read of the users
    /// row, limited to auth-relevant columns).
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, username, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::IdentityLoadError
        })?;

        Ok(user)
    }

    /// Shared bearer-token authentication logic behind the `AuthUser` guard.
    ///
    /// Verifies the token, then confirms the subject still exists in
    /// storage: claims referencing a deleted identity are rejected even
    /// when the signature is cryptographically valid.
    pub(crate) async fn authenticate_bearer(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        let claims = verify_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!("Token subject is not a valid user ID");
            AuthError::InvalidToken
        })?;

        require_identity(self.find_user(user_id).await?, user_id)
    }

    /// Operator credential check behind the `OperatorAuth` guard.
    pub(crate) fn verify_operator(&self, username: &str, password: &str) -> Result<(), AuthError> {
        verify_basic_credentials(username, password, &self.config)
    }
}

/// Reject claims whose subject no longer exists in storage.
///
/// Even a cryptographically valid token is refused once its subject row is
/// gone; the warning flags a stale or compromised token outliving its
/// subject's account.
pub(crate) fn require_identity(
    found: Option<AuthIdentity>,
    user_id: Uuid,
) -> Result<AuthIdentity, AuthError> {
    found.ok_or_else(|| {
        tracing::warn!(user_id = %user_id, "Valid token references a missing user");
        AuthError::IdentityNotFound
    })
}
