//! HTTP implementation of the topic server API.

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::header::CONTENT_TYPE;

use super::{ApiError, DeleteOutcome, DeleteResponse, Topic, TopicBackend};

/// Topic server client backed by reqwest.
#[derive(Clone)]
pub struct HttpTopicBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTopicBackend {
    /// Create a client for the server at `base_url` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TopicBackend for HttpTopicBackend {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/topics"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Topic>>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn create_topic(&self, title: &str, emoji: &str) -> Result<Topic, ApiError> {
        let response = self
            .client
            .post(self.url("/add_topic"))
            .form(&[("title", title), ("emoji", emoji)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Topic>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn delete_topic(&self, id: &str) -> DeleteOutcome {
        let url = self.url(&format!("/delete_topic/{id}"));
        debug!("Deleting topic {id} via {url}");

        // The endpoint takes no body but expects the JSON content type.
        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Delete request for topic {id} failed in transport: {e}");
                return DeleteOutcome::TransportFailed(e.to_string());
            }
        };

        let status = response.status().as_u16();
        let body = response
            .json::<DeleteResponse>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()));

        let outcome = DeleteOutcome::classify(status, body);
        match &outcome {
            DeleteOutcome::Deleted => debug!("Topic {id} deleted"),
            DeleteOutcome::Rejected(reason) => warn!("Server declined deletion of topic {id}: {reason}"),
            DeleteOutcome::TransportFailed(reason) => error!("Delete of topic {id} failed: {reason}"),
        }
        outcome
    }
}
