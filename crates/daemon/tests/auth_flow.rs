mod support;

use http::StatusCode;
use serde_json::json;

use support::{account_id, register, request, test_router};

#[tokio::test]
async fn register_then_me_roundtrip() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;

    let (status, body) = request(&router, "GET", "/api/v0/accounts/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["name"], "A");
    assert_eq!(body["account"]["email"], "a@x.com");
    // the hash must never be serialized
    assert!(body["account"].get("password_hash").is_none());
    assert!(body["account"]["avatar_url"]
        .as_str()
        .unwrap()
        .contains("gravatar.com"));
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let router = test_router().await;
    register(&router, "A", "a@x.com").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/accounts",
        None,
        Some(json!({"name": "B", "email": "a@x.com", "password": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn registration_validates_fields() {
    let router = test_router().await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/accounts",
        None,
        Some(json!({"name": "", "email": "not-an-email", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn login_mints_a_working_token() {
    let router = test_router().await;
    register(&router, "A", "a@x.com").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/sessions",
        None,
        Some(json!({"email": "a@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    let (status, body) = request(&router, "GET", "/api/v0/accounts/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["email"], "a@x.com");
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let router = test_router().await;
    register(&router, "A", "a@x.com").await;

    // wrong password
    let (status, _) = request(
        &router,
        "POST",
        "/api/v0/sessions",
        None,
        Some(json!({"email": "a@x.com", "password": "wrong-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // unknown email looks exactly the same
    let (status, _) = request(
        &router,
        "POST",
        "/api/v0/sessions",
        None,
        Some(json!({"email": "b@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_or_garbage_token_is_unauthorized() {
    let router = test_router().await;

    let (status, _) = request(&router, "GET", "/api/v0/accounts/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &router,
        "GET",
        "/api/v0/accounts/me",
        Some("not-a-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_the_account_cascades() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    let other = register(&router, "B", "b@x.com").await;
    let id = account_id(&router, &token).await;

    support::create_profile(&router, &token).await;
    support::create_post(&router, &token, "hello").await;

    let (status, _) = request(&router, "DELETE", "/api/v0/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // the still validly signed token now resolves to nothing
    let (status, _) = request(&router, "GET", "/api/v0/accounts/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &router,
        "GET",
        &format!("/api/v0/profiles/account/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&router, "GET", "/api/v0/posts", Some(&other), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["posts"].as_array().unwrap().is_empty());

    // deleting twice is not a silent success
    let (status, _) = request(&router, "DELETE", "/api/v0/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_404() {
    let router = test_router().await;

    let (status, body) = request(&router, "GET", "/api/v0/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_null() || body["msg"] == "not found");
}
