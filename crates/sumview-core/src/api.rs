use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Thread, ThreadRecord, ThreadSummary};

/// Failure of a backend request. The two transport-ish variants exist so the
/// UI can tell "backend not running" apart from a backend that answered badly.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// Human-facing explanation shown in the status bar
    pub fn user_message(&self, base_url: &str) -> String {
        match self {
            ApiError::Transport(err) if err.is_connect() => {
                format!("Could not reach the backend at {base_url} - is it running?")
            }
            other => other.to_string(),
        }
    }
}

/// Envelope around GET /api/threads. The metadata fields exist in the data
/// file the backend serves; nothing past logging needs them.
#[derive(Debug, Deserialize)]
pub struct ThreadsEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub threads: Vec<ThreadRecord>,
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    thread: &'a Thread,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    success: bool,
    summary: ThreadSummary,
    #[serde(default)]
    message: String,
}

/// Response from GET /health
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub thread_count: usize,
}

/// HTTP client for the summarizer backend
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full thread collection
    pub async fn fetch_threads(&self) -> Result<Vec<ThreadRecord>, ApiError> {
        let url = format!("{}/api/threads", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let envelope: ThreadsEnvelope = response.json().await?;
        debug!(
            version = envelope.version.as_deref().unwrap_or("unknown"),
            generated_at = envelope.generated_at.as_deref().unwrap_or("unknown"),
            count = envelope.threads.len(),
            "fetched thread collection"
        );
        Ok(envelope.threads)
    }

    /// Ask the backend to summarize one thread. The returned summary carries
    /// no review flags, so it comes back as `ReviewState::Pending`.
    pub async fn summarize(&self, thread: &Thread) -> Result<ThreadSummary, ApiError> {
        let url = format!("{}/api/summarize", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SummarizeRequest { thread })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let parsed: SummarizeResponse = response.json().await?;
        debug!(
            thread_id = %thread.thread_id,
            success = parsed.success,
            message = %parsed.message,
            "summary generated"
        );
        Ok(parsed.summary)
    }

    /// Probe GET /health. Used to sharpen failure diagnostics, not gate anything.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
