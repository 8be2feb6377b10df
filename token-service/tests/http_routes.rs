//! Integration tests for the token service HTTP routes.

use auth::{decode_token, Credentials, Permission, TokenIssuer};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use token_service::{router, TokenService};
use tower::ServiceExt;

const SECRET: &str = "integration-secret";

fn app() -> Router {
    router(TokenService::new(TokenIssuer::new(Credentials::new("integration-key", SECRET))))
}

async fn call(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/getVideoSDKToken")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn claims_of(body: &Value) -> auth::Claims {
    let token = body["result"]["token"].as_str().expect("token missing");
    decode_token(token, SECRET).expect("token does not verify")
}

#[tokio::test]
async fn test_host_with_room() {
    let (status, body) = call(app(), json!({ "data": { "as": "host", "roomId": "room42" } }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let claims = claims_of(&body);
    assert_eq!(claims.permissions, vec![Permission::AllowJoin, Permission::AllowMod]);
    assert_eq!(claims.room_id.as_deref(), Some("room42"));
    assert_eq!(claims.api_key, "integration-key");
}

#[tokio::test]
async fn test_viewer_and_defaults() {
    for data in [json!({ "as": "viewer" }), json!({}), json!({ "as": "moderator" }), json!(null)] {
        let (status, body) = call(app(), json!({ "data": data }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let claims = claims_of(&body);
        assert_eq!(claims.permissions, vec![Permission::AllowJoin]);
        assert_eq!(claims.room_id, None);
        assert_eq!(claims.version, 2);
        assert_eq!(claims.roles, vec!["rtc".to_string()]);
    }
}

#[tokio::test]
async fn test_non_string_room_id_is_omitted() {
    let (status, body) = call(app(), json!({ "data": { "as": "host", "roomId": 42 } }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(claims_of(&body).room_id, None);
}

#[tokio::test]
async fn test_response_contains_only_token() {
    let (_, body) = call(app(), json!({ "data": {} }).to_string()).await;

    let result = body["result"].as_object().unwrap();
    assert_eq!(result.len(), 1);
    assert!(!body.to_string().contains(SECRET));
}

#[tokio::test]
async fn test_missing_data_is_bad_request() {
    let (status, body) = call(app(), json!({ "as": "host" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (status, body) = call(app(), "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_missing_secret_is_internal_error() {
    let app = router(TokenService::new(TokenIssuer::new(Credentials::new("integration-key", ""))));
    let (status, body) = call(app, json!({ "data": { "as": "host" } }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["status"], "INTERNAL");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["ok"], true);
}
