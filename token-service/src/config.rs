use std::time::Duration;

use auth::{Credentials, DEFAULT_TTL_SECS};
use error::ConfigError;

pub const API_KEY_VAR: &str = "VIDEOSDK_KEY";
pub const SECRET_VAR: &str = "VIDEOSDK_SECRET";
pub const HTTP_ADDR_VAR: &str = "HTTP_ADDR";
pub const TOKEN_TTL_VAR: &str = "TOKEN_TTL_SECS";

/// Longest accepted token validity: 7 days.
pub const MAX_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Token service configuration
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HTTP server address
    pub http_addr: String,

    /// Media provider API key and signing secret
    pub credentials: Credentials,

    /// Token validity in seconds
    pub token_ttl_secs: u64,

    /// Service version
    pub version: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            credentials: Credentials::new("", ""),
            token_ttl_secs: DEFAULT_TTL_SECS as u64,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Create configuration from environment variables, after loading `.env`
    /// if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(HTTP_ADDR_VAR) {
            config.http_addr = addr;
        }

        config.credentials = Credentials::new(
            lookup(API_KEY_VAR).unwrap_or_default(),
            lookup(SECRET_VAR).unwrap_or_default(),
        );

        if let Some(ttl) = lookup(TOKEN_TTL_VAR) {
            config.token_ttl_secs = match ttl.trim().parse() {
                Ok(n) if n > 0 && n <= MAX_TOKEN_TTL_SECS => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: TOKEN_TTL_VAR.to_string(),
                        value: ttl,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Get token validity as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Environment variables whose credential is empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.api_key().is_empty() {
            missing.push(API_KEY_VAR);
        }
        if !self.credentials.has_secret() {
            missing.push(SECRET_VAR);
        }
        missing
    }
}
