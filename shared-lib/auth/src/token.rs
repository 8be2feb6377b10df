//! JWT encoding and decoding utilities.

use error::AuthError;
use hmac::{Hmac, Mac};
use jwt::header::HeaderType;
use jwt::{AlgorithmType, Header, SignWithKey, Token, Verified, VerifyWithKey};
use sha2::Sha256;

use crate::claims::Claims;

type HmacSha256 = Hmac<Sha256>;

fn hmac_key(secret: &str) -> Result<HmacSha256, AuthError> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::TokenCreationFailed
    })
}

/// Encode claims into an HS256 JWT.
///
/// An empty secret is refused: the token would be unverifiable by the
/// media provider.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let key = hmac_key(secret)?;

    let header = Header {
        algorithm: AlgorithmType::Hs256,
        type_: Some(HeaderType::JsonWebToken),
        ..Default::default()
    };

    let token = Token::new(header, claims).sign_with_key(&key).map_err(|e| {
        tracing::error!("Failed to encode JWT: {}", e);
        AuthError::TokenCreationFailed
    })?;

    Ok(token.as_str().to_owned())
}

/// Decode and validate a JWT against the current time.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode_token_at(token, secret, chrono::Utc::now().timestamp())
}

/// Decode and validate a JWT as of `now` (Unix timestamp).
pub fn decode_token_at(token: &str, secret: &str, now: i64) -> Result<Claims, AuthError> {
    let key = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::InvalidToken
    })?;

    let verified: Token<Header, Claims, Verified> = token.verify_with_key(&key).map_err(|e| {
        tracing::warn!("Failed to decode JWT: {}", e);
        AuthError::InvalidToken
    })?;

    let claims = verified.claims().clone();
    if claims.is_expired_at(now) {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}
