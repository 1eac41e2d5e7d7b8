//! Homework Status Bot
//!
//! Polls the homework status API on a fixed period and forwards status
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials from the environment (or a `.env` file),
//!   tunables with defaults
//! - Repositories: HTTP communication with the status API
//! - Services: notification delivery and the clock
//! - Scheduler: the poll/diff/notify loop
//!
//! The only fatal error is missing configuration. Everything else is
//! reported to the chat and retried after the period.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::repository::HttpStatusRepository;
use crate::scheduler::StatusPoller;
use crate::service::{SystemClock, TelegramNotifier};
use hwstatus_client::{StatusClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already set in the environment win over the file
    let env_file = dotenvy::dotenv().ok();

    init_tracing(&config::log_file_from_env());

    info!("Starting homework status bot");
    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }

    let config = load_config()?;
    info!(
        "Loaded configuration: status_endpoint={}, retry_period={:?}",
        config.status_endpoint, config.retry_period
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let repository = Arc::new(HttpStatusRepository::new(StatusClient::with_client(
        config.status_endpoint.clone(),
        config.api_token.clone(),
        http.clone(),
    )));
    let notifier = Arc::new(TelegramNotifier::new(
        TelegramClient::with_client(
            config.telegram_api_url.clone(),
            config.bot_token.clone(),
            http,
        ),
        config.chat_id.clone(),
    ));

    let poller = StatusPoller::new(
        config.retry_period,
        repository,
        notifier,
        Arc::new(SystemClock),
    );

    poller.run(shutdown_signal()).await;

    info!("Homework status bot stopped");
    Ok(())
}

/// Logs to stdout and, without colors, to `log_file`
fn init_tracing(log_file: &str) {
    let (file_layer, file_error) = match OpenOptions::new().create(true).append(true).open(log_file)
    {
        Ok(file) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwstatus_bot=debug,hwstatus_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Cannot open log file {}: {}, logging to stdout only", log_file, e);
    }
}

/// Loads and validates configuration, logging every missing variable
fn load_config() -> Result<Config> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::Missing(names)) => {
            for name in &names {
                error!("Missing required environment variable: {}", name);
            }
            let e = ConfigError::Missing(names);
            error!("{:?} error: stopping, required configuration is missing", e.kind());
            return Err(e.into());
        }
        Err(e) => {
            error!("{:?} error: {}", e.kind(), e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        error!("{:?} error: {}", e.kind(), e);
        return Err(e.into());
    }

    Ok(config)
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
