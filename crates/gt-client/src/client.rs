// client.rs — GoalStoreClient: reqwest-backed implementation of GoalStore.
//
// Each operation is exactly one round trip. There are no retries and no
// timeout beyond reqwest's defaults — failure policy lives in the caller.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::json;
use url::Url;

use crate::error::StoreError;
use crate::goal::Goal;
use crate::store::GoalStore;

/// HTTP client for the remote goal store.
pub struct GoalStoreClient {
    http: Client,
    base_url: Url,
}

impl GoalStoreClient {
    /// Create a client for the store at `base_url`. The collection lives
    /// at `{base_url}/goals`; a trailing slash on the base is tolerated.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Create a client that reuses an existing connection pool.
    pub fn with_http(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/goals", self.base_url.as_str().trim_end_matches('/'))
    }

    fn goal_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Map a non-2xx response to `HttpStatus`, otherwise pass it through.
    fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::HttpStatus(status.as_u16()));
        }
        Ok(response)
    }

    /// Decode a 2xx response body. Reads the raw bytes first so a garbled
    /// payload surfaces as `Decode` rather than being folded into the
    /// transport error.
    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl GoalStore for GoalStoreClient {
    async fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
        tracing::debug!(url = %self.collection_url(), "listing goals");
        let response = self.http.get(self.collection_url()).send().await?;
        let response = Self::check_status(response)?;
        let goals: Vec<Goal> = Self::decode(response).await?;
        tracing::debug!(count = goals.len(), "listed goals");
        Ok(goals)
    }

    async fn create_goal(&self, text: &str) -> Result<Goal, StoreError> {
        tracing::debug!(url = %self.collection_url(), "creating goal");
        let response = self
            .http
            .post(self.collection_url())
            .json(&json!({ "text": text }))
            .send()
            .await?;
        let response = Self::check_status(response)?;
        let goal: Goal = Self::decode(response).await?;
        tracing::debug!(id = goal.id, "created goal");
        Ok(goal)
    }

    async fn delete_goal(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(url = %self.goal_url(id), "deleting goal");
        let response = self.http.delete(self.goal_url(id)).send().await?;
        Self::check_status(response)?;
        tracing::debug!(id, "deleted goal");
        Ok(())
    }
}
