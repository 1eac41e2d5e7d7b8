//! Notifier service
//!
//! Hands messages to the messenger. Delivery is best effort: failures are
//! logged and reported as `false`, never raised.

use async_trait::async_trait;
use hwstatus_client::TelegramClient;
use tracing::{debug, error};

/// Service trait for delivering a message to the fixed destination
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message`
    ///
    /// # Returns
    /// `true` if the messenger accepted the message
    async fn notify(&self, message: &str) -> bool;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> bool {
        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => {
                debug!("Message delivered to chat {}", self.chat_id);
                true
            }
            Err(e) => {
                error!("Failed to send Telegram message: {}", e);
                false
            }
        }
    }
}
