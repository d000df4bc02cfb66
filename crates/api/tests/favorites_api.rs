//! HTTP-level integration tests for `/api/favorites`.

mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use serde_json::{json, Value};

fn galle_fort() -> Value {
    json!({ "placeId": "p1", "name": "Fort", "address": "Galle", "lat": 6.0268, "lng": 80.217 })
}

#[tokio::test]
async fn test_add_favorite_twice() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("a@x.com").await;

    let response = app.post_json("/api/favorites", Some(&token), galle_fort()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Added to favorites!");
    assert_eq!(json["favorites"].as_array().unwrap().len(), 1);
    assert_eq!(json["favorites"][0]["placeId"], "p1");

    let response = app.post_json("/api/favorites", Some(&token), galle_fort()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Place already in favorites");

    let list = body_json(app.get("/api/favorites", Some(&token)).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_favorite_creates_recommendation_notification() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("rec@x.com").await;
    app.post_json("/api/favorites", Some(&token), galle_fort()).await;

    let notes = body_json(app.get("/api/notifications", Some(&token)).await).await;
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["type"], "recommendation");
    assert_eq!(notes[0]["link"], "/favorites");
    assert_eq!(notes[0]["isRead"], false);
}

#[tokio::test]
async fn test_notification_outage_does_not_fail_favorite() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("outage@x.com").await;
    app.store.set_notifications_unavailable(true);

    let response = app.post_json("/api/favorites", Some(&token), galle_fort()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["favorites"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_favorites_are_per_user() {
    let app = TestApp::new();
    let (alice, _) = app.register_and_login("alice@x.com").await;
    let (bob, _) = app.register_and_login("bob@x.com").await;

    app.post_json("/api/favorites", Some(&alice), galle_fort()).await;

    let response = app.post_json("/api/favorites", Some(&bob), galle_fort()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(app.get("/api/favorites", Some(&bob)).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_favorite_is_idempotent() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("rm@x.com").await;
    app.post_json("/api/favorites", Some(&token), galle_fort()).await;

    let response = app.delete("/api/favorites/p1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Removed from favorites");
    assert!(json["favorites"].as_array().unwrap().is_empty());

    let response = app.delete("/api/favorites/p1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_place_fields_are_rejected() {
    let app = TestApp::new();
    let (token, _) = app.register_and_login("missing@x.com").await;

    let response = app
        .post_json("/api/favorites", Some(&token), json!({ "name": "No id" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
