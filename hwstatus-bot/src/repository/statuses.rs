//! Status repository
//!
//! Fetches the raw homework status response for a poll window.

use async_trait::async_trait;
use hwstatus_client::{ApiError, StatusClient};
use serde_json::Value;

/// Repository trait for homework status queries
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed since `since` (Unix seconds)
    async fn fetch_statuses(&self, since: i64) -> Result<Value, ApiError>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: StatusClient,
}

impl HttpStatusRepository {
    pub fn new(client: StatusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_statuses(&self, since: i64) -> Result<Value, ApiError> {
        self.client.fetch(since).await
    }
}
