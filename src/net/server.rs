// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The mock ask endpoint.
//!
//! `POST /api/ask` accepts a multipart body with an `image` file part and a
//! `question` text part and answers with a description that simply echoes
//! the question. A real deployment would swap the echo for a call to an
//! image-understanding service behind the same envelope.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;

/// Largest multipart body accepted. The GUI downscales before upload, but
/// third-party callers may not.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Serialize)]
struct AskReply {
    description: String,
}

#[derive(Serialize)]
struct ErrorReply {
    error: String,
}

/// Build the ask router. Cross-origin callers are allowed from anywhere.
pub fn router() -> Router {
    Router::new()
        .route("/api/ask", post(ask))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

async fn ask(mut multipart: Multipart) -> Response {
    let mut image: Option<Bytes> = None;
    let mut question: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().map(str::to_string);
                match name.as_deref() {
                    Some("image") => match field.bytes().await {
                        Ok(bytes) => image = Some(bytes),
                        Err(e) => return internal_error(e),
                    },
                    Some("question") => match field.text().await {
                        Ok(text) => question = Some(text),
                        Err(e) => return internal_error(e),
                    },
                    // Unknown parts are dropped unread.
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(e) => return internal_error(e),
        }
    }

    match (image, question) {
        (Some(image), Some(question)) => {
            log::info!("Answering question against a {} byte image", image.len());
            let description = format!(
                "This is a mock description for the image. The question was: \"{question}\""
            );
            (StatusCode::OK, Json(AskReply { description })).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: "Missing image or question".to_string(),
            }),
        )
            .into_response(),
    }
}

fn internal_error(e: impl std::fmt::Display) -> Response {
    log::error!("Error processing request: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorReply {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
