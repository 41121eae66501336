//! Administrative reseed over HTTP.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::spawn_app;

// The default seed directory resolves to the workspace's seed/ exports:
// five providers, four receivers, six listings, five claims.
#[tokio::test]
async fn test_reseed_wipes_and_reloads_exports() {
    let app = spawn_app().await;

    // Mutate the store first so the reload is observable.
    let (status, _) = app
        .send_json(
            Method::POST,
            "/api/listings",
            json!({
                "food_name": "Bread",
                "quantity": 3,
                "expiry_date": "2026-02-01",
                "provider_id": 1,
                "location": "Chennai",
                "food_type": "Vegan",
                "meal_type": "Breakfast"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.send_empty(Method::POST, "/api/admin/reseed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["providers"], 5);
    assert_eq!(body["data"]["receivers"], 4);
    assert_eq!(body["data"]["listings"], 6);
    assert_eq!(body["data"]["claims"], 5);

    // The store now holds exactly the exported rows.
    let (status, body) = app.get("/api/listings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("listings").len(), 6);

    let (_, body) = app.get("/api/providers").await;
    assert_eq!(body["data"].as_array().expect("providers").len(), 5);
}
