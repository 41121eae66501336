//! Provider/receiver/claim directory over HTTP, plus health probes.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn test_health_probes() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_provider_registration_and_update() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/providers",
            json!({
                "name": "Sunrise Caterers",
                "kind": "Catering Service",
                "address": "221 Lake Road",
                "city": "Delhi",
                "contact": "s@example.com"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().expect("id");

    let (status, body) = app
        .send_json(
            Method::PUT,
            &format!("/api/providers/{id}"),
            json!({ "contact": "new@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["contact"], "new@example.com");
    assert_eq!(body["data"]["name"], "Sunrise Caterers");

    let (status, body) = app.get("/api/providers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("providers").len(), 3);
}

#[tokio::test]
async fn test_provider_contacts_by_city() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/providers/contacts?city=Chennai").await;
    assert_eq!(status, StatusCode::OK);

    let contacts = body["data"].as_array().expect("contacts");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Green Bistro");
}

#[tokio::test]
async fn test_receivers_are_read_only_listable() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/receivers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("receivers").len(), 2);

    let (status, body) = app.get("/api/receivers/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Hope Shelter");

    let (status, _) = app.get("/api/receivers/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_claims_filterable_by_status() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/claims").await;
    assert_eq!(status, StatusCode::OK);
    let claims = body["data"].as_array().expect("claims");
    assert_eq!(claims.len(), 3);
    // Newest first.
    assert_eq!(claims[0]["id"], 3);

    let (status, body) = app.get("/api/claims?status=Pending").await;
    assert_eq!(status, StatusCode::OK);
    let pending = body["data"].as_array().expect("claims");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["status"], "Pending");
}
