//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Operator credentials for the basic-auth guarded health endpoint
    pub basic_username: String,
    pub basic_password: String,

    /// Token signing configuration
    pub token_secret: String,
    pub token_issuer: String,
    pub token_audience: String,
    pub token_ttl_hours: i64,

    /// Runtime configuration
    pub environment: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            basic_username: env::var("AUTH_BASIC_USER")
                .map_err(|_| anyhow::anyhow!("AUTH_BASIC_USER is required"))?,
            basic_password: env::var("AUTH_BASIC_PASS")
                .map_err(|_| anyhow::anyhow!("AUTH_BASIC_PASS is required"))?,

            token_secret: env::var("TOKEN_SECRET")
                .map_err(|_| anyhow::anyhow!("TOKEN_SECRET is required"))?,
            token_issuer: env::var("TOKEN_ISSUER").unwrap_or_else(|_| "murmur".to_string()),
            token_audience: env::var("TOKEN_AUDIENCE").unwrap_or_else(|_| "murmur".to_string()),
            // Tokens live three days by default, matching the short-lived
            // stateless-token tradeoff: no revocation list, bounded exposure.
            token_ttl_hours: env::var("TOKEN_TTL_HOURS")
                .unwrap_or_else(|_| "72".to_string())
                .parse()
                .unwrap_or(72),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        };

        Ok(config)
    }
}
