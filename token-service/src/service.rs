//! Token service
//!
//! Admits untrusted request payloads and hands them to the issuer.

use std::sync::Arc;

use auth::{IssuedToken, TokenIssuer, TokenRequest};
use error::AuthError;
use serde_json::Value;

use crate::config::TokenServiceConfig;

/// Stateless token service. Cloning shares the same issuer.
#[derive(Debug, Clone)]
pub struct TokenService {
    issuer: Arc<TokenIssuer>,
}

impl TokenService {
    pub fn new(issuer: TokenIssuer) -> Self {
        Self {
            issuer: Arc::new(issuer),
        }
    }

    /// Build the service from configuration.
    pub fn from_config(config: &TokenServiceConfig) -> Self {
        Self::new(TokenIssuer::new(config.credentials.clone()).with_ttl(config.token_ttl()))
    }

    /// Issue a token for a raw callable payload.
    pub fn get_token(&self, data: &Value) -> Result<IssuedToken, AuthError> {
        let request = TokenRequest::from_value(data);
        tracing::debug!(role = %request.role(), has_room = request.room_id.is_some(), "Token requested");

        self.issuer.issue(&request).map_err(|e| {
            tracing::error!("Token issuance failed: {}", e);
            e
        })
    }
}
