//! Authentication flow handlers
//!
//! Implements:
//! - POST /v1/authentication/user — register a new user
//! - POST /v1/authentication/token — exchange credentials for a token
//!
//! Token issuance here is a separate flow from the guard chain: the login
//! handler asks the auth backend to mint a token; guards only verify.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::domain::entities::User;
use murmur_common::{hash_password, verify_password, Error, Result, ValidatedJson};

/// Public profile shape returned for user operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Request for user registration
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, max = 100))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

/// Request for token creation (login)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTokenRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response carrying a freshly minted token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Well-formed hash of a discarded random password. Verified against on
/// the unknown-email path so a lookup miss costs the same work as a
/// password mismatch.
const DECOY_PASSWORD_HASH: &str = "9b1dca5f4ef34c28b0d5caf6d6c9a1e3:1c9dcffb5c30de5a283d93c5a45017fca7c17646e62ffe39e1491ac9a91a0a72";

/// POST /v1/authentication/user — register a new user
pub async fn register_user(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse> {
    let password_hash = hash_password(&request.password);

    let user = state
        .repos
        .users
        .create(&request.username, &request.email, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /v1/authentication/token — exchange email/password for a token
pub async fn create_token(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<CreateTokenRequest>,
) -> Result<Json<TokenResponse>> {
    // Unknown email and wrong password are the same failure on the wire,
    // and both paths run a full hash verification so response timing does
    // not reveal whether the address is registered.
    let user = match state.repos.users.find_by_email(&request.email).await? {
        Some(user) => user,
        None => {
            verify_password(&request.password, DECOY_PASSWORD_HASH);
            return Err(Error::Authentication("Invalid credentials".to_string()));
        }
    };

    if !verify_password(&request.password, &user.password_hash) {
        return Err(Error::Authentication("Invalid credentials".to_string()));
    }

    let token = state.auth.issue_token(user.id).map_err(|e| {
        tracing::error!(error = ?e, user_id = %user.id, "Failed to issue token");
        Error::Internal("Failed to issue token".to_string())
    })?;

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterUserRequest {
            username: "navi".to_string(),
            email: "navi@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterUserRequest {
            username: "ab".to_string(),
            email: "navi@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(short_username.validate().is_err());

        let bad_email = RegisterUserRequest {
            username: "navi".to_string(),
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterUserRequest {
            username: "navi".to_string(),
            email: "navi@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_create_token_request_validation() {
        let valid = CreateTokenRequest {
            email: "navi@example.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = CreateTokenRequest {
            email: "navi@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_decoy_hash_is_well_formed_and_never_matches() {
        // Must exercise the full salt-decode-and-digest path, yet accept
        // no password anyone could send.
        let (salt, hash) = DECOY_PASSWORD_HASH.split_once(':').unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(hash.len(), 64);
        assert!(!verify_password("", DECOY_PASSWORD_HASH));
        assert!(!verify_password("password", DECOY_PASSWORD_HASH));
        assert!(!verify_password(DECOY_PASSWORD_HASH, DECOY_PASSWORD_HASH));
    }

    #[test]
    fn test_user_response_omits_credentials() {
        let user = User {
            id: Uuid::new_v4(),
            username: "navi".to_string(),
            email: "navi@example.com".to_string(),
            password_hash: "aa:bb".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("navi@example.com"));
        assert!(!json.contains("password"));
    }
}
