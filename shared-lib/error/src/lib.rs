//! Common error types for the token issuer.
//!
//! This crate provides the error taxonomy shared by the `auth` library and
//! the token service, plus the error body returned to callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token issuance and verification errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Token creation failed")]
    TokenCreationFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Callable status codes understood by clients.
pub mod status {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Error body for API clients.
///
/// Serialized inside an `{"error": ...}` envelope by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status code for programmatic handling
    pub status: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The generic internal failure. Carries no detail about the cause.
    pub fn internal() -> Self {
        Self::new(status::INTERNAL, "INTERNAL")
    }

    /// A request the transport could not parse.
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::new(status::INVALID_ARGUMENT, "Bad Request").with_details(details)
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        match err {
            // Issuance failures surface as a bare INTERNAL, like any other
            // unhandled error of the callable.
            AuthError::MissingApiKey | AuthError::MissingSecret | AuthError::TokenCreationFailed => {
                Self::internal()
            }
            AuthError::InvalidToken => Self::new(status::UNAUTHENTICATED, "Invalid token"),
            AuthError::TokenExpired => Self::new(status::UNAUTHENTICATED, "Token has expired"),
        }
    }
}
