mod common;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

#[tokio::test]
async fn test_shorten_requires_authentication() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/url/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_shorten_rejects_garbage_token() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer("not-a-token")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_shorten_rejects_expired_token_uniformly() {
    let app = common::spawn_app();

    let id = common::signup(&app.server, "a@x.com", "secret").await;
    let expired = app.token_service.issue_with_ttl(id, Duration::hours(-1));

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&expired)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    // The body must not say the token was expired rather than invalid.
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_shorten_generates_six_character_code() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let code = body["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(body["targetURL"], "https://example.com");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_shorten_uses_caller_chosen_code_verbatim() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "code": "my-link" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["shortCode"], "my-link");
}

#[tokio::test]
async fn test_shorten_duplicate_custom_code_conflict() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let first = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "code": "taken" }))
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://other.com", "code": "taken" }))
        .await;

    second.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_rejects_malformed_custom_code() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "code": "has spaces" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_stores_target_url_opaquely() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    // Not syntactically a URL; the service must not care.
    let response = app
        .server
        .post("/url/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "just some text" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["targetURL"],
        "just some text"
    );
}
