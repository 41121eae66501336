//! Browse panel: filtered search and filter options.

use axum::http::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn test_unfiltered_search_orders_by_expiry() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/listings").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["data"].as_array().expect("listings");
    assert_eq!(rows.len(), 3);
    let names: Vec<&str> = rows
        .iter()
        .map(|row| row["food_name"].as_str().expect("food_name"))
        .collect();
    assert_eq!(names, vec!["Chicken Curry", "Samosa", "Rice"]);
    // Provider contact fields are embedded in each row.
    assert_eq!(rows[0]["provider_name"], "Daily Mart");
    assert_eq!(rows[0]["provider_contact"], "m@example.com");
}

#[tokio::test]
async fn test_search_with_combined_filters() {
    let app = spawn_app().await;
    let (status, body) = app
        .get("/api/listings?location=Chennai&food_type=Vegetarian&meal_type=Lunch")
        .await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["data"].as_array().expect("listings");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["food_name"], "Rice");
}

#[tokio::test]
async fn test_search_unmatched_city_is_empty() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/listings?location=Nowhere").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().expect("listings").is_empty());
}

#[tokio::test]
async fn test_filter_options() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/listings/filters").await;
    assert_eq!(status, StatusCode::OK);

    let locations = body["data"]["locations"].as_array().expect("locations");
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0], "Chennai");
    assert_eq!(
        body["data"]["food_types"].as_array().expect("food types").len(),
        3
    );
    assert_eq!(
        body["data"]["meal_types"].as_array().expect("meal types").len(),
        4
    );
}
