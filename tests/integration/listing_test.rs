//! Listing CRUD over HTTP.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn test_create_get_update_delete_listing() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/listings",
            json!({
                "food_name": "Paneer Wraps",
                "quantity": 12,
                "expiry_date": "2026-02-01",
                "provider_id": 1,
                "location": "Chennai",
                "food_type": "Vegetarian",
                "meal_type": "Lunch"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["food_name"], "Paneer Wraps");
    let id = body["data"]["id"].as_i64().expect("id");

    let (status, body) = app.get(&format!("/api/listings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quantity"], 12);

    let (status, body) = app
        .send_json(
            Method::PUT,
            &format!("/api/listings/{id}"),
            json!({ "quantity": 5 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quantity"], 5);
    // Unchanged fields survive a partial update.
    assert_eq!(body["data"]["food_name"], "Paneer Wraps");

    let (status, _) = app
        .send_empty(Method::DELETE, &format!("/api/listings/{id}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/listings/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_listing_with_unknown_provider_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/listings",
            json!({
                "food_name": "Bread",
                "quantity": 3,
                "expiry_date": "2026-02-01",
                "provider_id": 999,
                "location": "Chennai",
                "food_type": "Vegan",
                "meal_type": "Breakfast"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().expect("message").contains("999"));
}

#[tokio::test]
async fn test_create_listing_with_negative_quantity_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/listings",
            json!({
                "food_name": "Bread",
                "quantity": -1,
                "expiry_date": "2026-02-01",
                "provider_id": 1,
                "location": "Chennai",
                "food_type": "Vegan",
                "meal_type": "Breakfast"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_missing_listing_is_not_found() {
    let app = spawn_app().await;
    let (status, _) = app.send_empty(Method::DELETE, "/api/listings/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_listing_removes_its_claims() {
    let app = spawn_app().await;

    let (status, _) = app.send_empty(Method::DELETE, "/api/listings/1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/claims").await;
    assert_eq!(status, StatusCode::OK);
    let claims = body["data"].as_array().expect("claims");
    assert_eq!(claims.len(), 2);
    assert!(claims.iter().all(|c| c["listing_id"] != 1));

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims WHERE listing_id = 1")
        .fetch_one(&app.pool)
        .await
        .expect("count");
    assert_eq!(remaining, 0);
}
