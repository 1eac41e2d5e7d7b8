//! Homework Status HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the bot talks to:
//! - [`StatusClient`]: the homework status API, polled with a time window
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver messages
//!
//! # Example
//!
//! ```no_run
//! use hwstatus_client::{StatusClient, TelegramClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let status = StatusClient::new("https://example.com/api/statuses/", "api-token");
//! let body = status.fetch(0).await?;
//!
//! let telegram = TelegramClient::new("bot-token");
//! telegram.send_message("12345", &body.to_string()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
mod status;
mod telegram;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ApiError, Result, TelegramError};
pub use status::StatusClient;
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};
