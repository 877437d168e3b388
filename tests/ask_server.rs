// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Behavior of the mock ask endpoint.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use imagemuse::net::server::router;
use tower::ServiceExt;

const BOUNDARY: &str = "muse-test-boundary";

/// Hand-rolled multipart/form-data body. `filename` marks file parts.
fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, content) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(f) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn ask_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_description_echoes_the_question() {
    let body = multipart_body(&[
        ("image", Some("photo.png"), b"fake image bytes"),
        ("question", None, b"describe this"),
    ]);
    let response = router().oneshot(ask_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let description = json["description"].as_str().unwrap();
    assert!(description.contains("describe this"));
}

#[tokio::test]
async fn test_missing_question_is_a_client_error() {
    let body = multipart_body(&[("image", Some("photo.png"), b"fake image bytes")]);
    let response = router().oneshot(ask_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Missing image or question");
}

#[tokio::test]
async fn test_missing_image_is_a_client_error() {
    let body = multipart_body(&[("question", None, b"what is this?")]);
    let response = router().oneshot(ask_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Missing image or question");
}

#[tokio::test]
async fn test_unknown_parts_are_ignored() {
    let body = multipart_body(&[
        ("extra", None, b"noise"),
        ("image", Some("photo.png"), b"fake image bytes"),
        ("question", None, b"still works?"),
    ]);
    let response = router().oneshot(ask_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["description"].as_str().unwrap().contains("still works?"));
}

#[tokio::test]
async fn test_non_multipart_body_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_cross_origin_callers_are_allowed() {
    let body = multipart_body(&[
        ("image", Some("photo.png"), b"fake image bytes"),
        ("question", None, b"cors?"),
    ]);
    let mut request = ask_request(body);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse().unwrap());

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
