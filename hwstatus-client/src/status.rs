//! Homework status API

use crate::error::{ApiError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

/// HTTP client for the homework status API
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - OAuth token for the `Authorization` header
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the status endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `since` (Unix seconds)
    ///
    /// Only HTTP 200 counts as success. The body is returned as untyped
    /// JSON; shape checks are left to the caller.
    ///
    /// # Errors
    /// * [`ApiError::Connection`] if no response was received
    /// * [`ApiError::InvalidResponseCode`] for any status other than 200
    /// * [`ApiError::Parse`] if the body is not valid JSON
    pub async fn fetch(&self, since: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", since);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::invalid_response_code(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                body,
            ));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
