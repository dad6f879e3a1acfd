//! Integration tests for athlete image uploads.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use common::{PUBLIC_BASE, body_json, build_test_app};
use tower::ServiceExt;

const BOUNDARY: &str = "----directory-test-boundary";

enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, filename: &'a str, content_type: &'a str, bytes: &'a [u8] },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File { name, filename, content_type, bytes } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/athletes/upload")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_stores_file_and_returns_public_url() {
    let (app, images) = build_test_app();
    let body = multipart_body(&[
        Part::Text { name: "type", value: "avatar" },
        Part::File {
            name: "file",
            filename: "portrait.png",
            content_type: "image/png",
            bytes: b"\x89PNG fake",
        },
    ]);

    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let url = json["url"].as_str().unwrap();
    let path = url
        .strip_prefix(&format!("{PUBLIC_BASE}/"))
        .expect("URL should point into the bucket");
    assert!(path.starts_with("avatar/"));
    assert!(path.ends_with(".png"));

    let stored = images.get(path).await.unwrap();
    assert_eq!(stored.bytes, b"\x89PNG fake".to_vec());
    assert_eq!(stored.content_type, "image/png");
}

#[tokio::test]
async fn upload_without_extension_defaults_to_jpg() {
    let (app, _) = build_test_app();
    let body = multipart_body(&[
        Part::Text { name: "type", value: "cover" },
        Part::File {
            name: "file",
            filename: "banner",
            content_type: "image/jpeg",
            bytes: b"jpeg bytes",
        },
    ]);

    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.contains("/cover/"));
    assert!(url.ends_with(".jpg"));
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let (app, images) = build_test_app();
    let body = multipart_body(&[Part::Text { name: "type", value: "avatar" }]);

    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No file provided");
    assert_eq!(images.object_count().await, 0);
}

#[tokio::test]
async fn upload_with_empty_form_is_rejected() {
    let (app, _) = build_test_app();

    let response = app.oneshot(upload_request(multipart_body(&[]))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No form data provided");
}

#[tokio::test]
async fn upload_with_unknown_type_is_rejected() {
    let (app, images) = build_test_app();
    let body = multipart_body(&[
        Part::Text { name: "type", value: "banner" },
        Part::File {
            name: "file",
            filename: "banner.png",
            content_type: "image/png",
            bytes: b"png",
        },
    ]);

    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(images.object_count().await, 0);
}

#[tokio::test]
async fn upload_that_is_not_multipart_is_rejected() {
    let (app, _) = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/athletes/upload")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"type":"avatar"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "success": false, "error": "No form data provided" }));
}
