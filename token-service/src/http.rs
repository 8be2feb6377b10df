//! HTTP routes
//!
//! Exposes the token service through the callable-function protocol:
//! requests carry `{"data": ...}`, successes return `{"result": ...}` and
//! failures return `{"error": {"status", "message"}}`.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use error::{status, ErrorResponse};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::service::TokenService;

/// Path of the token endpoint.
pub const TOKEN_PATH: &str = "/getVideoSDKToken";

#[derive(Debug, Deserialize)]
struct CallableRequest {
    data: Value,
}

#[derive(Debug, Serialize)]
struct CallableResult<T> {
    result: T,
}

#[derive(Debug, Serialize)]
struct CallableError {
    error: ErrorResponse,
}

/// Build the service router.
pub fn router(service: TokenService) -> Router {
    Router::new()
        .route(TOKEN_PATH, post(get_token))
        .route("/health", get(health))
        .with_state(service)
}

async fn get_token(State(service): State<TokenService>, body: Bytes) -> Response {
    let request: CallableRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected malformed callable request: {}", e);
            return error_response(ErrorResponse::invalid_argument(e.to_string()));
        }
    };

    match service.get_token(&request.data) {
        Ok(token) => (StatusCode::OK, Json(CallableResult { result: token })).into_response(),
        Err(e) => error_response(e.into()),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "token-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn error_response(error: ErrorResponse) -> Response {
    let code = match error.status.as_str() {
        status::INVALID_ARGUMENT => StatusCode::BAD_REQUEST,
        status::UNAUTHENTICATED => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (code, Json(CallableError { error })).into_response()
}
