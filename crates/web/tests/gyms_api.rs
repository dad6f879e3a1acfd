//! Integration tests for the gym endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_app, delete, get, post, put, send_raw};
use serde_json::json;

#[tokio::test]
async fn create_fetch_delete_round_trip() {
    let (app, _) = build_test_app();

    let (status, created) = post(
        &app,
        "/api/gyms",
        json!({ "name": "Iron Works", "address": "1 Main St", "location": { "lat": 1, "lng": 1 } }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["schedule"], json!([]));
    assert_eq!(created["data"]["pricing"], json!([]));
    assert_eq!(created["data"]["description"], "");
    assert!(created["data"]["createdAt"].is_string());

    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/gyms/{id}");

    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);

    let (status, deleted) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"], created["data"]);

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Gym not found" }));
}

#[tokio::test]
async fn create_without_location_is_rejected() {
    let (app, _) = build_test_app();

    let (status, body) = post(
        &app,
        "/api/gyms",
        json!({ "name": "Iron Works", "address": "1 Main St" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, address, and location are required");
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let (app, _) = build_test_app();
    let (_, created) = post(
        &app,
        "/api/gyms",
        json!({
            "name": "Iron Works",
            "address": "1 Main St",
            "location": { "lat": -26.2, "lng": 28.04 },
            "amenities": ["Showers"]
        }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, updated) = put(
        &app,
        &format!("/api/gyms/{id}"),
        json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "pricing": [{ "type": "Monthly", "price": 450.0 }],
            "schedule": [{ "day": "Monday", "times": "06:00-20:00" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &updated["data"];
    assert_eq!(data["id"], id);
    assert_eq!(data["name"], "Iron Works");
    assert_eq!(data["amenities"], json!(["Showers"]));
    assert_eq!(data["pricing"], json!([{ "type": "Monthly", "price": 450.0 }]));
    assert_eq!(data["schedule"][0]["day"], "Monday");
    assert_eq!(data["createdAt"], created["data"]["createdAt"]);
    assert_ne!(data["updatedAt"], created["data"]["updatedAt"]);
}

#[tokio::test]
async fn unknown_or_malformed_ids_are_not_found() {
    let (app, _) = build_test_app();

    let (status, _) = get(&app, "/api/gyms/8d5e3c4e-2f7c-4c55-9d0b-1f2a3b4c5d6e").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = put(&app, "/api/gyms/not-a-uuid", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/gyms/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_keeps_insertion_order() {
    let (app, _) = build_test_app();
    for name in ["Zebra Fight Club", "Apex MMA"] {
        post(
            &app,
            "/api/gyms",
            json!({ "name": name, "address": "1 Main St", "location": { "lat": 0, "lng": 0 } }),
        )
        .await;
    }

    let (status, body) = get(&app, "/api/gyms").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Zebra Fight Club", "Apex MMA"]);
}

#[tokio::test]
async fn malformed_bodies_get_error_envelope() {
    let (app, _) = build_test_app();

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/api/gyms",
        Some("application/json"),
        r#"{"name":"G","#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    let (status, body) = post(
        &app,
        "/api/gyms",
        json!({ "name": "G", "address": "1 Main St", "location": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send_raw(&app, Method::POST, "/api/gyms", None, r#"{"name":"G"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, list) = get(&app, "/api/gyms").await;
    assert_eq!(list["data"], json!([]));
}
