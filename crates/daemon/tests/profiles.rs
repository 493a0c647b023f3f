mod support;

use http::StatusCode;
use serde_json::json;

use support::{account_id, create_profile, register, request, test_router};

#[tokio::test]
async fn upsert_validates_status_and_skills() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/profiles",
        Some(&token),
        Some(json!({"status": "", "skills": "  ,  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"status"));
    assert!(fields.contains(&"skills"));
}

#[tokio::test]
async fn upsert_creates_then_updates_scalars() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/profiles",
        Some(&token),
        Some(json!({
            "status": "Developer",
            "skills": "Rust, SQL , ,Tokio",
            "company": "Acme",
            "social": {"twitter": "https://twitter.com/a"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["status"], "Developer");
    assert_eq!(body["profile"]["skills"], json!(["Rust", "SQL", "Tokio"]));
    assert_eq!(body["profile"]["company"], "Acme");
    assert_eq!(
        body["profile"]["social"]["twitter"],
        "https://twitter.com/a"
    );

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/profiles",
        Some(&token),
        Some(json!({"status": "Manager", "skills": "Planning"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["status"], "Manager");
    assert_eq!(body["profile"]["skills"], json!(["Planning"]));
    // omitted scalars reset, as on any full upsert
    assert!(body["profile"]["company"].is_null());
}

#[tokio::test]
async fn upsert_preserves_experience_and_education() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, _) = request(
        &router,
        "PUT",
        "/api/v0/profiles/experience",
        Some(&token),
        Some(json!({"title": "Engineer", "company": "Acme", "from": "2020-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &router,
        "POST",
        "/api/v0/profiles",
        Some(&token),
        Some(json!({"status": "Manager", "skills": "Planning"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["experience"].as_array().unwrap().len(), 1);
    assert_eq!(body["profile"]["experience"][0]["title"], "Engineer");
}

#[tokio::test]
async fn me_without_a_profile_is_not_found() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;

    let (status, body) = request(&router, "GET", "/api/v0/profiles/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "there is no profile for this account");
}

#[tokio::test]
async fn profiles_are_publicly_listed_and_fetched() {
    let router = test_router().await;
    let a = register(&router, "A", "a@x.com").await;
    let b = register(&router, "B", "b@x.com").await;
    create_profile(&router, &a).await;
    create_profile(&router, &b).await;
    let a_id = account_id(&router, &a).await;

    // no token on either request
    let (status, body) = request(&router, "GET", "/api/v0/profiles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profiles"].as_array().unwrap().len(), 2);

    let (status, body) = request(
        &router,
        "GET",
        &format!("/api/v0/profiles/account/{a_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["account_id"], a_id);
}

#[tokio::test]
async fn experience_entries_prepend() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    for title in ["First", "Second"] {
        let (status, _) = request(
            &router,
            "PUT",
            "/api/v0/profiles/experience",
            Some(&token),
            Some(json!({"title": title, "company": "Acme", "from": "2020-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = request(&router, "GET", "/api/v0/profiles/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let experience = body["profile"]["experience"].as_array().unwrap();
    assert_eq!(experience.len(), 2);
    assert_eq!(experience[0]["title"], "Second");
    assert_eq!(experience[1]["title"], "First");
}

#[tokio::test]
async fn experience_requires_title_company_and_from() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, body) = request(
        &router,
        "PUT",
        "/api/v0/profiles/experience",
        Some(&token),
        Some(json!({"title": "", "company": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn removing_an_unknown_experience_leaves_the_profile_alone() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, _) = request(
        &router,
        "PUT",
        "/api/v0/profiles/experience",
        Some(&token),
        Some(json!({"title": "Engineer", "company": "Acme", "from": "2020-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let missing = uuid::Uuid::new_v4();
    let (status, _) = request(
        &router,
        "DELETE",
        &format!("/api/v0/profiles/experience/{missing}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&router, "GET", "/api/v0/profiles/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["experience"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn experience_can_be_removed() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, body) = request(
        &router,
        "PUT",
        "/api/v0/profiles/experience",
        Some(&token),
        Some(json!({"title": "Engineer", "company": "Acme", "from": "2020-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entry_id = body["profile"]["experience"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, body) = request(
        &router,
        "DELETE",
        &format!("/api/v0/profiles/experience/{entry_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["profile"]["experience"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn education_requires_school_degree_field_and_from() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, body) = request(
        &router,
        "PUT",
        "/api/v0/profiles/education",
        Some(&token),
        Some(json!({"school": "", "degree": "", "field_of_study": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn education_round_trip() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;
    create_profile(&router, &token).await;

    let (status, body) = request(
        &router,
        "PUT",
        "/api/v0/profiles/education",
        Some(&token),
        Some(json!({
            "school": "MIT",
            "degree": "BSc",
            "field_of_study": "CS",
            "from": "2015-09-01",
            "to": "2019-06-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entry = &body["profile"]["education"][0];
    assert_eq!(entry["school"], "MIT");
    assert_eq!(entry["to"], "2019-06-01");
    let entry_id = entry["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &router,
        "DELETE",
        &format!("/api/v0/profiles/education/{entry_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["profile"]["education"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn entry_routes_without_a_profile_are_not_found() {
    let router = test_router().await;
    let token = register(&router, "A", "a@x.com").await;

    let (status, _) = request(
        &router,
        "PUT",
        "/api/v0/profiles/experience",
        Some(&token),
        Some(json!({"title": "Engineer", "company": "Acme", "from": "2020-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
