// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Query submission client.
//!
//! Packages the current image and a free-text question into a multipart
//! request against the ask endpoint. Runs on a background thread, so the
//! blocking reqwest client is fine here; the UI polls the result over a
//! channel.

use anyhow::{Context, Result};
use reqwest::blocking::multipart;
use serde::Deserialize;

/// Endpoint used when `IMAGEMUSE_ASK_URL` is not set.
pub const DEFAULT_ASK_URL: &str = "http://127.0.0.1:3000/api/ask";

/// Shown in place of a description when the request or response fails.
pub const FALLBACK_DESCRIPTION: &str = "An error occurred while processing your request.";

/// Blocking notice for a submission attempted without an image or question.
pub const PRECONDITION_NOTICE: &str = "Please upload an image and ask a question.";

/// Check submission preconditions before any network activity.
///
/// Returns the notice to show when the submission must be rejected, `None`
/// when it may proceed.
pub fn precondition_notice(has_image: bool, question: &str) -> Option<&'static str> {
    if !has_image || question.trim().is_empty() {
        Some(PRECONDITION_NOTICE)
    } else {
        None
    }
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    description: String,
}

/// Client for the ask endpoint.
pub struct AskClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl AskClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Build a client against `IMAGEMUSE_ASK_URL`, falling back to the
    /// bundled stub's default address.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("IMAGEMUSE_ASK_URL").unwrap_or_else(|_| DEFAULT_ASK_URL.to_string());
        Self::new(endpoint)
    }

    /// Submit an image and question, returning the server's description.
    pub fn ask(
        &self,
        image: Vec<u8>,
        file_name: String,
        mime: &str,
        question: &str,
    ) -> Result<String> {
        let part = multipart::Part::bytes(image)
            .file_name(file_name)
            .mime_str(mime)
            .context("invalid image MIME type")?;
        let form = multipart::Form::new()
            .part("image", part)
            .text("question", question.to_string());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .with_context(|| format!("request to {} failed", self.endpoint))?
            .error_for_status()
            .context("ask endpoint rejected the request")?;

        let body: AskResponse = response.json().context("malformed ask response")?;
        Ok(body.description)
    }

    /// Like [`ask`](Self::ask), but degrades every failure to the fixed
    /// fallback description after logging it. No retry.
    pub fn ask_or_fallback(
        &self,
        image: Vec<u8>,
        file_name: String,
        mime: &str,
        question: &str,
    ) -> String {
        match self.ask(image, file_name, mime, question) {
            Ok(description) => description,
            Err(e) => {
                log::error!("Submission failed: {e:#}");
                FALLBACK_DESCRIPTION.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_requires_an_image() {
        assert_eq!(
            precondition_notice(false, "describe this"),
            Some(PRECONDITION_NOTICE)
        );
    }

    #[test]
    fn test_submission_requires_a_question() {
        assert_eq!(precondition_notice(true, ""), Some(PRECONDITION_NOTICE));
        assert_eq!(precondition_notice(true, "   \n"), Some(PRECONDITION_NOTICE));
    }

    #[test]
    fn test_valid_submission_passes_the_check() {
        assert_eq!(precondition_notice(true, "describe this"), None);
    }
}
