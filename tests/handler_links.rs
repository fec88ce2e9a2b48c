mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_requires_authentication() {
    let app = common::spawn_app();

    let response = app.server.get("/url/codes").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_returns_only_own_links_in_creation_order() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    common::signup(&app.server, "b@x.com", "secret").await;
    let token_a = common::login(&app.server, "a@x.com", "secret").await;
    let token_b = common::login(&app.server, "b@x.com", "secret").await;

    common::shorten(&app.server, &token_a, "https://first.example").await;
    common::shorten(&app.server, &token_a, "https://second.example").await;
    common::shorten(&app.server, &token_b, "https://other.example").await;

    let response = app
        .server
        .get("/url/codes")
        .authorization_bearer(&token_a)
        .await;

    response.assert_status_ok();
    let links = response.json::<serde_json::Value>();
    let links = links.as_array().unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["targetURL"], "https://first.example");
    assert_eq!(links[1]["targetURL"], "https://second.example");
    assert_eq!(links[0]["visits"], 0);
}

#[tokio::test]
async fn test_delete_own_link_removes_it() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let (id, code) = common::shorten(&app.server, &token, "https://example.com").await;

    let response = app
        .server
        .delete(&format!("/url/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["deleted"], true);

    // The code no longer resolves.
    let resolve = app.server.get(&format!("/{code}")).await;
    resolve.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_foreign_link_reports_not_deleted() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    common::signup(&app.server, "b@x.com", "secret").await;
    let token_a = common::login(&app.server, "a@x.com", "secret").await;
    let token_b = common::login(&app.server, "b@x.com", "secret").await;

    let (id, code) = common::shorten(&app.server, &token_a, "https://example.com").await;

    let response = app
        .server
        .delete(&format!("/url/{id}"))
        .authorization_bearer(&token_b)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["deleted"], false);

    // The owner's link is untouched and still resolvable.
    let resolve = app.server.get(&format!("/{code}")).await;
    resolve.assert_status(StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_delete_unknown_id_looks_like_foreign_link() {
    let app = common::spawn_app();

    common::signup(&app.server, "a@x.com", "secret").await;
    let token = common::login(&app.server, "a@x.com", "secret").await;

    let response = app
        .server
        .delete("/url/999")
        .authorization_bearer(&token)
        .await;

    // Same status and shape as deleting someone else's link.
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "deleted": false })
    );
}
