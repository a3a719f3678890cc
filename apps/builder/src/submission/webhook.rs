//! PDF webhook client. The webhook accepts the résumé document as JSON and
//! answers with `{"url": ...}` on success or `{"message": ...}` on failure.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::resume::ResumeDocument;

pub const FALLBACK_MISSING_URL: &str = "PDF URL not found in the response.";
const NOT_CONFIGURED: &str = "PDF webhook endpoint is not configured";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Endpoint unreachable, timed out, or not configured.
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    NonSuccessStatus { status: u16, message: String },

    /// Success status but no usable URL in the body.
    #[error("{message}")]
    MalformedSuccess { message: String },
}

impl SubmissionError {
    /// The text shown to the user: server-supplied when available, otherwise
    /// a fallback for the failure kind.
    pub fn user_message(&self) -> &str {
        match self {
            SubmissionError::Transport(message)
            | SubmissionError::NonSuccessStatus { message, .. }
            | SubmissionError::MalformedSuccess { message } => message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::Transport(_) => "transport",
            SubmissionError::NonSuccessStatus { .. } => "non_success_status",
            SubmissionError::MalformedSuccess { .. } => "malformed_success",
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        SubmissionError::Transport(e.to_string())
    }
}

/// Produces a downloadable artifact for a document. Implement this to swap
/// the generation backend without touching the gateway or handlers.
#[async_trait]
pub trait ArtifactService: Send + Sync {
    /// Returns the artifact URL.
    async fn generate(&self, document: &ResumeDocument) -> Result<String, SubmissionError>;
}

#[derive(Debug, Default, Deserialize)]
struct WebhookResponse {
    url: Option<String>,
    message: Option<String>,
}

/// reqwest-backed client for the PDF webhook.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: Option<String>,
}

impl WebhookClient {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ArtifactService for WebhookClient {
    async fn generate(&self, document: &ResumeDocument) -> Result<String, SubmissionError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| SubmissionError::Transport(NOT_CONFIGURED.to_string()))?;

        debug!(endpoint, "Posting resume document to PDF webhook");

        let response = self
            .client
            .post(endpoint)
            .header("content-type", "application/json")
            .json(document)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Maps a webhook reply to an artifact URL or a classified failure.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, SubmissionError> {
    let parsed = serde_json::from_str::<WebhookResponse>(body);

    if !status.is_success() {
        let message = parsed
            .ok()
            .and_then(|r| non_blank(r.message))
            .unwrap_or_else(|| {
                format!(
                    "Network response was not ok: {}",
                    status.canonical_reason().unwrap_or(status.as_str())
                )
            });
        warn!(status = status.as_u16(), %message, "PDF webhook returned an error status");
        return Err(SubmissionError::NonSuccessStatus {
            status: status.as_u16(),
            message,
        });
    }

    let parsed = match parsed {
        Ok(r) => r,
        Err(e) => {
            warn!("PDF webhook returned an unparseable body: {e}");
            WebhookResponse::default()
        }
    };

    match non_blank(parsed.url) {
        Some(url) => Ok(url),
        None => Err(SubmissionError::MalformedSuccess {
            message: non_blank(parsed.message)
                .unwrap_or_else(|| FALLBACK_MISSING_URL.to_string()),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
