//! RTC room token library.
//!
//! This crate maps a caller's requested role onto a fixed permission set
//! and signs the resulting claims into a short-lived HS256 JWT that the
//! media provider verifies with the shared secret.

mod claims;
mod issuer;
mod request;
mod token;

pub use claims::{Claims, Permission, Role, DEFAULT_TTL_SECS, RTC_ROLE, SCHEMA_VERSION};
pub use issuer::{Credentials, IssuedToken, TokenIssuer};
pub use request::TokenRequest;
pub use token::{decode_token, decode_token_at, encode_token};
