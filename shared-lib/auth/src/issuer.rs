//! RTC token issuance.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error::AuthError;
use serde::{Deserialize, Serialize};

use crate::claims::{Claims, DEFAULT_TTL_SECS};
use crate::request::TokenRequest;
use crate::token::encode_token;

/// Credentials shared with the media provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Issued token as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
}

/// Issues signed RTC room tokens.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    credentials: Credentials,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create an issuer with the default 120 minute validity.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }

    /// Override the token validity.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        self
    }

    /// Claims a request maps to when issued at `issued_at` (Unix timestamp).
    pub fn claims_for(&self, request: &TokenRequest, issued_at: i64) -> Result<Claims, AuthError> {
        Claims::new(
            self.credentials.api_key(),
            request.role(),
            request.room_id.clone(),
            issued_at,
            self.ttl_secs,
        )
    }

    /// Issue a token valid from now.
    pub fn issue(&self, request: &TokenRequest) -> Result<IssuedToken, AuthError> {
        self.issue_at(request, Utc::now())
    }

    /// Issue a token as of `now`. Output is deterministic for a fixed `now`.
    pub fn issue_at(&self, request: &TokenRequest, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        if self.credentials.api_key().is_empty() {
            return Err(AuthError::MissingApiKey);
        }

        let claims = self.claims_for(request, now.timestamp())?;
        let token = encode_token(&claims, self.credentials.secret())?;

        tracing::debug!(
            role = %request.role(),
            room_id = ?claims.room_id,
            exp = claims.exp,
            "Issued RTC token"
        );

        Ok(IssuedToken { token })
    }
}
