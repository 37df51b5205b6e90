//! Topic server API abstraction.
//!
//! This module defines the interface the UI uses to talk to the topic
//! server, along with the payload types and the classification of delete
//! responses. The concrete HTTP implementation lives in [`http`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpTopicBackend;

/// Common error types for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// A topic as served by `GET /api/topics`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of a `POST /delete_topic/{id}` response.
///
/// The server always answers 200 with a `success` flag; `error` carries the
/// reason when the deletion was declined (topic already gone, constraint).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Terminal outcome of one delete request.
///
/// Transport failures and declined deletions surface the same generic
/// notification to the user but are logged distinctly.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// 2xx response with a truthy success flag.
    Deleted,
    /// 2xx response but the server declined the deletion.
    Rejected(String),
    /// Network error or non-2xx status, uniform regardless of code.
    TransportFailed(String),
}

impl DeleteOutcome {
    /// Classify a delete response from its transport result and parsed body.
    ///
    /// Non-success statuses are failures without inspecting the body.
    pub fn classify(status: u16, body: Result<DeleteResponse, ApiError>) -> Self {
        if !(200..300).contains(&status) {
            return DeleteOutcome::TransportFailed(format!("HTTP status {status}"));
        }
        match body {
            Ok(resp) if resp.success => DeleteOutcome::Deleted,
            Ok(resp) => DeleteOutcome::Rejected(resp.error.unwrap_or_else(|| "server declined the deletion".to_string())),
            Err(e) => DeleteOutcome::TransportFailed(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Interface to the topic server.
///
/// The UI only ever talks to this trait; tests substitute a scripted
/// implementation instead of a live server.
#[async_trait]
pub trait TopicBackend: Send + Sync {
    /// Fetch all topics for the board.
    async fn fetch_topics(&self) -> Result<Vec<Topic>, ApiError>;

    /// Create a topic. The server applies the default emoji when the
    /// emoji field is blank.
    async fn create_topic(&self, title: &str, emoji: &str) -> Result<Topic, ApiError>;

    /// Issue the delete request for `id` and classify the result.
    ///
    /// Implementations never return an error: every failure mode collapses
    /// into a [`DeleteOutcome`] so the caller has a single resolution path.
    async fn delete_topic(&self, id: &str) -> DeleteOutcome;
}
