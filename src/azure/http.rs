//! HTTP utilities for ARM REST API calls

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Localized error bodies contain multi-byte characters, so the cut
        // must land on a char boundary
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..cut],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Outcome classification of a failed ARM call.
///
/// Not-found is separated out because callers treat a missing resource as a
/// terminal user error rather than a transport problem.
#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Whether a response status identifies a missing resource
pub fn response_was_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

/// HTTP client wrapper for ARM API calls
#[derive(Clone)]
pub struct ArmHttpClient {
    client: Client,
}

impl ArmHttpClient {
    /// Create a new HTTP client
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("azpool/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Make a GET request to an ARM API
    pub async fn get(&self, url: &str, token: &str) -> Result<Value, ApiFailure> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if response_was_not_found(status) {
            tracing::debug!("API returned 404 for {}", url);
            return Err(ApiFailure::NotFound);
        }

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(anyhow::anyhow!("API request failed: {}", status).into());
        }

        serde_json::from_str(&body)
            .context("Failed to parse response JSON")
            .map_err(ApiFailure::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classifier_matches_404_only() {
        assert!(response_was_not_found(StatusCode::NOT_FOUND));
        assert!(!response_was_not_found(StatusCode::OK));
        assert!(!response_was_not_found(StatusCode::FORBIDDEN));
        assert!(!response_was_not_found(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn long_bodies_are_truncated_in_logs() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated, 500 bytes total"));
    }

    #[test]
    fn control_characters_are_stripped_from_logs() {
        let sanitized = sanitize_for_log("ok\u{7}\nline");
        assert_eq!(sanitized, "okline");
    }

    #[test]
    fn multibyte_body_straddling_the_limit_does_not_panic() {
        // Byte 200 falls inside the two-byte 'é'
        let body = format!("{}étranger", "x".repeat(MAX_LOG_BODY_LENGTH - 1));
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH - 1)));
    }

    #[test]
    fn multibyte_only_body_is_truncated_on_a_boundary() {
        let body = "ü".repeat(MAX_LOG_BODY_LENGTH);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains(&format!("{} bytes total", MAX_LOG_BODY_LENGTH * 2)));
    }
}
