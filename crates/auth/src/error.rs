//! Authentication errors
//!
//! Malformed credentials are a client bug and map to 400; everything else
//! the client could fix by re-authenticating maps to 401. Responses never
//! echo which part of a token failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header on a guarded route
    MissingAuthorization,
    /// Header does not match the expected `Scheme payload` shape
    MalformedAuthorization,
    /// Token string cannot be parsed or decoded at all
    MalformedToken,
    /// Basic credentials do not match the configured operator pair
    InvalidCredentials,
    /// Signature or claims check failed
    InvalidToken,
    /// Token was valid once but its expiry has passed
    ExpiredToken,
    /// Token subject no longer exists in storage
    IdentityNotFound,
    /// Storage failure while resolving the identity
    IdentityLoadError,
    /// Token signing failed
    TokenCreation,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::MalformedAuthorization => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_AUTHORIZATION",
                "Malformed authorization header",
            ),
            AuthError::MalformedToken => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_TOKEN",
                "Malformed token",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid token",
            ),
            AuthError::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "EXPIRED_TOKEN",
                "Token has expired",
            ),
            // Deliberately indistinguishable from an invalid token on the
            // wire; the elevated-severity log happens at the backend.
            AuthError::IdentityNotFound => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid token",
            ),
            AuthError::IdentityLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IDENTITY_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION",
                "Failed to create token",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingAuthorization, StatusCode::UNAUTHORIZED),
            (AuthError::MalformedAuthorization, StatusCode::BAD_REQUEST),
            (AuthError::MalformedToken, StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (AuthError::IdentityNotFound, StatusCode::UNAUTHORIZED),
            (
                AuthError::IdentityLoadError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AuthError::TokenCreation, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_identity_not_found_is_generic_on_the_wire() {
        // A vanished identity must not be distinguishable from a bad token
        let not_found = AuthError::IdentityNotFound.into_response();
        let invalid = AuthError::InvalidToken.into_response();
        assert_eq!(not_found.status(), invalid.status());

        let body = axum::body::to_bytes(not_found.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    }
}
