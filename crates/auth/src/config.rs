//! Authentication configuration

use chrono::Duration;

/// Authentication configuration
///
/// Constructed once at startup and passed into `AuthBackend`; never a
/// mutable global, so tests can use distinct secrets per test.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify tokens
    pub token_secret: String,
    /// Expected `iss` claim
    pub token_issuer: String,
    /// Expected `aud` claim
    pub token_audience: String,
    /// Token lifetime; `exp = iat + token_ttl`
    pub token_ttl: Duration,
    /// Operator credentials for basic-auth guarded routes
    pub basic_username: String,
    pub basic_password: String,
}

#[cfg(test)]
impl AuthConfig {
    /// Config fixture for unit tests
    pub(crate) fn for_tests(secret: &str) -> Self {
        Self {
            token_secret: secret.to_string(),
            token_issuer: "murmur".to_string(),
            token_audience: "murmur".to_string(),
            token_ttl: Duration::days(3),
            basic_username: "admin".to_string(),
            basic_password: "admin".to_string(),
        }
    }
}
