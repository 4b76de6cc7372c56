//! Token issuance and verification
//!
//! Tokens are self-contained: subject, issuer, audience, and expiry ride in
//! the signed payload, so no server-side session state is kept.

use axum::http::HeaderValue;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Mint a signed token for a subject; `exp = now + configured TTL`.
pub(crate) fn issue_token(subject: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        iss: config.token_issuer.clone(),
        aud: config.token_audience.clone(),
        iat: now.timestamp() as u64,
        exp: (now + config.token_ttl).timestamp() as u64,
    };

    let encoding_key = EncodingKey::from_secret(config.token_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign token");
        AuthError::TokenCreation
    })
}

/// Verify a token: signature, expiry, issuer, and audience.
///
/// Failure modes are distinguished so callers can map them to different
/// client behavior: expired → re-authenticate, malformed → client bug,
/// invalid signature → possible tampering (logged at warn).
pub(crate) fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[&config.token_issuer]);
    validation.set_audience(&[&config.token_audience]);

    let decoding_key = DecodingKey::from_secret(config.token_secret.as_ref());
    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AuthError::MalformedToken,
            ErrorKind::InvalidSignature => {
                tracing::warn!("Token signature verification failed");
                AuthError::InvalidToken
            }
            _ => {
                tracing::debug!(error = %e, "Token validation failed");
                AuthError::InvalidToken
            }
        }
    })?;

    Ok(token_data.claims)
}

/// Extract the raw token from a `Bearer <token>` Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::MalformedAuthorization)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::MalformedAuthorization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn encode_with(claims: &Claims, secret: &str) -> String {
        let key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::new(Algorithm::HS256), claims, &key).expect("Failed to encode token")
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let config = AuthConfig::for_tests("s1");
        let token = issue_token("42", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "murmur");
        assert_eq!(claims.aud, "murmur");
        assert_eq!(claims.exp, claims.iat + 3 * 24 * 3600);
    }

    #[test]
    fn test_repeated_verify_is_idempotent() {
        let config = AuthConfig::for_tests("s1");
        let token = issue_token("42", &config).unwrap();

        let first = verify_token(&token, &config).unwrap();
        let second = verify_token(&token, &config).unwrap();
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.iat, second.iat);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        // Simulate clock advance past the validity window by minting a
        // token whose expiry is already in the past.
        let config = AuthConfig::for_tests("s1");
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "42".to_string(),
            iss: "murmur".to_string(),
            aud: "murmur".to_string(),
            iat: now - 4 * 24 * 3600,
            exp: now - 24 * 3600,
        };
        let token = encode_with(&claims, &config.token_secret);

        // Expired, never "invalid"
        assert_eq!(verify_token(&token, &config), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn test_wrong_secret_is_invalid_not_expired() {
        let config = AuthConfig::for_tests("s1");
        let other = AuthConfig::for_tests("s2");
        let token = issue_token("42", &other).unwrap();

        assert_eq!(verify_token(&token, &config), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_wrong_secret_wins_over_expiry() {
        // Expired AND badly signed: signature failure takes precedence
        let config = AuthConfig::for_tests("s1");
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "42".to_string(),
            iss: "murmur".to_string(),
            aud: "murmur".to_string(),
            iat: now - 4 * 24 * 3600,
            exp: now - 24 * 3600,
        };
        let token = encode_with(&claims, "not-the-secret");

        assert_eq!(verify_token(&token, &config), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_garbage_string_is_malformed() {
        let config = AuthConfig::for_tests("s1");
        assert_eq!(
            verify_token("garbage-string", &config),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(verify_token("", &config), Err(AuthError::MalformedToken));
        assert_eq!(
            verify_token("a.b", &config),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn test_issuer_mismatch_rejected() {
        let config = AuthConfig::for_tests("s1");
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "42".to_string(),
            iss: "someone-else".to_string(),
            aud: "murmur".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_with(&claims, &config.token_secret);

        assert_eq!(verify_token(&token, &config), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_audience_mismatch_rejected() {
        let config = AuthConfig::for_tests("s1");
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "42".to_string(),
            iss: "murmur".to_string(),
            aud: "someone-else".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_with(&claims, &config.token_secret);

        assert_eq!(verify_token(&token, &config), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_extract_bearer_token() {
        // Valid bearer token
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");

        // Missing scheme
        let header = HeaderValue::from_static("abc123");
        assert_eq!(
            extract_bearer_token(&header),
            Err(AuthError::MalformedAuthorization)
        );

        // Wrong scheme
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(
            extract_bearer_token(&header),
            Err(AuthError::MalformedAuthorization)
        );
    }
}
