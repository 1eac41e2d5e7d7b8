//! Telegram Bot API

use crate::error::TelegramError;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Public Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    /// Create a client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a client against a custom Bot API server with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to a chat
    ///
    /// Success means the Bot API accepted the message, not that the
    /// recipient has read it.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        debug!("Sending Telegram message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TelegramError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
