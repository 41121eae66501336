//! Ad-hoc SQL console over HTTP.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn test_select_returns_table() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/query",
            json!({ "sql": "SELECT name, city FROM providers ORDER BY id" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["columns"], json!(["name", "city"]));
    assert_eq!(body["data"]["rows"][0][0], "Green Bistro");
}

#[tokio::test]
async fn test_write_statements_are_rejected() {
    let app = spawn_app().await;
    for sql in ["DELETE FROM providers", "DROP TABLE claims", "UPDATE listings SET quantity = 0"] {
        let (status, body) = app
            .send_json(Method::POST, "/api/query", json!({ "sql": sql }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for: {sql}");
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    // The rejected statement must not have taken effect.
    let (_, body) = app
        .send_json(
            Method::POST,
            "/api/query",
            json!({ "sql": "SELECT COUNT(*) AS n FROM providers" }),
        )
        .await;
    assert_eq!(body["data"]["rows"][0][0], 2);
}

#[tokio::test]
async fn test_sql_error_is_surfaced() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/query",
            json!({ "sql": "SELECT * FROM no_such_table" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["message"]
            .as_str()
            .expect("message")
            .contains("no_such_table")
    );
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let app = spawn_app().await;
    let (status, _) = app
        .send_json(Method::POST, "/api/query", json!({ "sql": "   " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
