use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::prelude::AuthTokens;
use devcircle_daemon::database::Database;
use devcircle_daemon::http_server;
use devcircle_daemon::ServiceState;

pub const AUTH_HEADER: &str = "x-auth-token";

/// Router over a fresh in-memory database.
pub async fn test_router() -> Router {
    let url = url::Url::parse("sqlite::memory:").unwrap();
    let database = Database::connect(&url).await.unwrap();
    let auth = AuthTokens::new(b"test-secret", time::Duration::hours(1));
    http_server::router(ServiceState::new(database, auth))
}

/// Fire one request at the router and decode the JSON body (Null when
/// the body is empty).
pub async fn request(
    router: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(AUTH_HEADER, token);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // non-JSON bodies (the plain-text 404 fallback) come back as Null
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Register an account and return its bearer token.
pub async fn register(router: &Router, name: &str, email: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/v0/accounts",
        None,
        Some(json!({"name": name, "email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// The caller's account id, as the API reports it.
pub async fn account_id(router: &Router, token: &str) -> String {
    let (status, body) = request(router, "GET", "/api/v0/accounts/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    body["account"]["id"].as_str().unwrap().to_string()
}

/// Create a minimal profile for the caller.
pub async fn create_profile(router: &Router, token: &str) {
    let (status, _) = request(
        router,
        "POST",
        "/api/v0/profiles",
        Some(token),
        Some(json!({"status": "Developer", "skills": "Rust, SQL"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

/// Create a post and return its id.
pub async fn create_post(router: &Router, token: &str, text: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/v0/posts",
        Some(token),
        Some(json!({"text": text})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["post"]["id"].as_str().unwrap().to_string()
}
