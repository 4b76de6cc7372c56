//! Token claims types

use serde::{Deserialize, Serialize};

/// Claims embedded in a signed Murmur token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
