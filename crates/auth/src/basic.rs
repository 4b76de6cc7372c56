//! Operator credential verification (basic auth)

use axum::http::HeaderValue;
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Decode a `Basic <base64(user:pass)>` Authorization header.
///
/// Any shape violation (wrong scheme, undecodable base64, non-UTF-8
/// payload, missing `:` separator) is a malformed request, not an
/// authentication failure.
pub(crate) fn parse_basic_header(header: &HeaderValue) -> Result<(String, String), AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::MalformedAuthorization)?;

    let payload = header_str
        .strip_prefix("Basic ")
        .ok_or(AuthError::MalformedAuthorization)?;

    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| AuthError::MalformedAuthorization)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedAuthorization)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedAuthorization)?;

    Ok((username.to_string(), password.to_string()))
}

/// Check a presented pair against the configured operator pair.
///
/// Both fields are compared in constant time over SHA-256 digests (so the
/// comparison cost does not depend on input length), and the two results
/// are combined without short-circuiting.
pub(crate) fn verify_basic_credentials(
    username: &str,
    password: &str,
    config: &AuthConfig,
) -> Result<(), AuthError> {
    let username_ok = digest_eq(username, &config.basic_username);
    let password_ok = digest_eq(password, &config.basic_password);

    if username_ok & password_ok {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

fn digest_eq(presented: &str, configured: &str) -> bool {
    let presented = Sha256::digest(presented.as_bytes());
    let configured = Sha256::digest(configured.as_bytes());
    murmur_common::crypto::constant_time_eq(presented.as_slice(), configured.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_header_valid() {
        // base64("admin:admin")
        let header = HeaderValue::from_static("Basic YWRtaW46YWRtaW4=");
        let (user, pass) = parse_basic_header(&header).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "admin");
    }

    #[test]
    fn test_parse_basic_header_password_may_contain_colon() {
        // base64("admin:pa:ss") — only the first colon separates
        let encoded = STANDARD.encode("admin:pa:ss");
        let header = HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap();
        let (user, pass) = parse_basic_header(&header).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "pa:ss");
    }

    #[test]
    fn test_parse_basic_header_malformed() {
        for raw in [
            "Bearer YWRtaW46YWRtaW4=", // wrong scheme
            "YWRtaW46YWRtaW4=",        // no scheme
            "Basic !!!not-base64!!!",  // undecodable
            "Basic YWRtaW5hZG1pbg==",  // base64("adminadmin"), no colon
        ] {
            let header = HeaderValue::from_static(raw);
            assert_eq!(
                parse_basic_header(&header),
                Err(AuthError::MalformedAuthorization),
                "expected malformed for {raw:?}"
            );
        }
    }

    #[test]
    fn test_verify_exact_pair_accepted() {
        let config = AuthConfig::for_tests("s1");
        assert!(verify_basic_credentials("admin", "admin", &config).is_ok());
    }

    #[test]
    fn test_verify_mismatches_rejected() {
        let config = AuthConfig::for_tests("s1");
        for (user, pass) in [
            ("admin", "wrong"),
            ("wrong", "admin"),
            ("wrong", "wrong"),
            ("", ""),
            ("admin", ""),
            ("", "admin"),
        ] {
            assert_eq!(
                verify_basic_credentials(user, pass, &config),
                Err(AuthError::InvalidCredentials),
                "expected rejection for {user:?}/{pass:?}"
            );
        }
    }
}
