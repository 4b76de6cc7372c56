//! Password hashing utilities shared across Murmur crates
//!
//! Provides password hashing and verification using SHA-256 with random
//! salts and constant-time comparison to prevent timing attacks.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Hash a password with a freshly generated random salt.
///
/// The stored hash format is `hex(salt):hex(sha256(password || salt))`.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt);
    let hash = hasher.finalize();

    format!("{}:{}", hex::encode(salt), hex::encode(hash))
}

/// Verify a password against a stored hash using constant-time comparison.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    let Some((salt_hex, hash_hex)) = stored_hash.split_once(':') else {
        return false;
    };

    let salt = match hex::decode(salt_hex) {
        Ok(salt) => salt,
        Err(_) => return false,
    };

    let hash = match hex::decode(hash_hex) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.update(&salt);
    let candidate_hash = hasher.finalize();

    constant_time_eq(&hash, candidate_hash.as_slice())
}

/// Constant-time byte-slice comparison.
///
/// Inputs of differing length compare unequal immediately; the callers only
/// compare fixed-size digests, so length is not secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
