//! HTTP-level integration tests for `/api/notifications`.

mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use serde_json::json;

async fn favorite(app: &TestApp, token: &str, place_id: &str) {
    let response = app
        .post_json(
            "/api/favorites",
            Some(token),
            json!({ "placeId": place_id, "name": place_id, "address": "Kandy" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("a@x.com").await;
    favorite(&app, &token, "first").await;
    favorite(&app, &token, "second").await;

    let notes = body_json(app.get("/api/notifications", Some(&token)).await).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes[0]["message"].as_str().unwrap().contains("second"));
}

#[tokio::test]
async fn test_list_is_capped_at_fifty() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("many@x.com").await;
    for i in 0..55 {
        favorite(&app, &token, &format!("p{i}")).await;
    }

    let notes = body_json(app.get("/api/notifications", Some(&token)).await).await;
    assert_eq!(notes.as_array().unwrap().len(), 50);

    let count = body_json(app.get("/api/notifications/unread-count", Some(&token)).await).await;
    assert_eq!(count["count"], 55);
}

#[tokio::test]
async fn test_mark_read_and_read_all() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("read@x.com").await;
    favorite(&app, &token, "a").await;
    favorite(&app, &token, "b").await;

    let notes = body_json(app.get("/api/notifications", Some(&token)).await).await;
    let id = notes[0]["id"].as_i64().unwrap();

    let response = app
        .put(&format!("/api/notifications/{id}/read"), Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isRead"], true);

    let count = body_json(app.get("/api/notifications/unread-count", Some(&token)).await).await;
    assert_eq!(count["count"], 1);

    let response = app.put("/api/notifications/read-all", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "All notifications marked as read");
    assert_eq!(json["marked"], 1);

    let count = body_json(app.get("/api/notifications/unread-count", Some(&token)).await).await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_other_users_notifications_are_off_limits() {
    let app = TestApp::new();
    let (owner, _) = app.register_and_login("owner@x.com").await;
    let (stranger, _) = app.register_and_login("stranger@x.com").await;
    favorite(&app, &owner, "a").await;

    let notes = body_json(app.get("/api/notifications", Some(&owner)).await).await;
    let id = notes[0]["id"].as_i64().unwrap();

    let response = app
        .put(&format!("/api/notifications/{id}/read"), Some(&stranger))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .delete(&format!("/api/notifications/{id}"), Some(&stranger))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let stranger_notes = body_json(app.get("/api/notifications", Some(&stranger)).await).await;
    assert!(stranger_notes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_notification() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("del@x.com").await;
    favorite(&app, &token, "a").await;

    let notes = body_json(app.get("/api/notifications", Some(&token)).await).await;
    let id = notes[0]["id"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/notifications/{id}"), Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Notification removed");

    let response = app
        .delete(&format!("/api/notifications/{id}"), Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
