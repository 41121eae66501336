//! Analytics catalog over HTTP.

use axum::http::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn test_report_index_lists_all_entries() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/reports").await;
    assert_eq!(status, StatusCode::OK);

    let reports = body["data"].as_array().expect("reports");
    assert_eq!(reports.len(), 16);
    assert!(reports.iter().all(|r| r["slug"].is_string() && r["title"].is_string()));
}

#[tokio::test]
async fn test_total_quantity_report() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/reports/total-quantity-available").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table"]["columns"][0], "total_available");
    assert_eq!(body["data"]["table"]["rows"][0][0], 45);
}

#[tokio::test]
async fn test_food_type_counts_report() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/reports/food-type-counts").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["data"]["table"]["rows"].as_array().expect("rows");
    // Two Vegetarian listings, one Non-Vegetarian.
    assert_eq!(rows[0][0], "Vegetarian");
    assert_eq!(rows[0][1], 2);
}

#[tokio::test]
async fn test_average_quantity_per_food_type_report() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/reports/average-quantity-per-food-type").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["data"]["table"]["rows"].as_array().expect("rows");
    assert_eq!(rows[0][0], "Vegetarian");
    assert_eq!(rows[0][1].as_f64().expect("average"), 17.5);
}

#[tokio::test]
async fn test_unknown_report_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/reports/no-such-report").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
