//! RTC Token Service
//!
//! Issues signed room tokens for the media provider over HTTP.

pub mod config;
pub mod http;
pub mod service;
pub mod shutdown;

pub use config::TokenServiceConfig;
pub use http::router;
pub use service::TokenService;
