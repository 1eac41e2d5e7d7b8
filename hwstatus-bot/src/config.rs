//! Bot configuration
//!
//! Credentials come from the environment and are required. Endpoints,
//! the retry period and the request timeout have defaults so a deployment
//! only has to provide the three secrets.

use hwstatus_core::ErrorKind;
use std::time::Duration;
use thiserror::Error;

/// Required: OAuth token for the status API
pub const API_TOKEN: &str = "API_TOKEN";
/// Required: Telegram bot token
pub const BOT_TOKEN: &str = "BOT_TOKEN";
/// Required: destination chat
pub const CHAT_ID: &str = "CHAT_ID";

const REQUIRED_VARS: [&str; 3] = [API_TOKEN, BOT_TOKEN, CHAT_ID];

pub const DEFAULT_STATUS_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Config
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub api_token: String,

    /// Telegram bot token
    pub bot_token: String,

    /// Chat that receives notifications
    pub chat_id: String,

    /// Full URL of the homework status endpoint
    pub status_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Sleep between poll cycles
    pub retry_period: Duration,

    /// Timeout applied to every outgoing HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - API_TOKEN (required)
    /// - BOT_TOKEN (required)
    /// - CHAT_ID (required)
    /// - STATUS_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable source
    ///
    /// Every missing or empty required variable is reported, not just the
    /// first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|name| required(*name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let seconds = |name: &str, default: u64| {
            lookup(name)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(default))
        };

        Ok(Self {
            api_token: required(API_TOKEN).unwrap_or_default(),
            bot_token: required(BOT_TOKEN).unwrap_or_default(),
            chat_id: required(CHAT_ID).unwrap_or_default(),
            status_endpoint: lookup("STATUS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_STATUS_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| hwstatus_client::DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: seconds("RETRY_PERIOD", 600),
            request_timeout: seconds("REQUEST_TIMEOUT", 30),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.status_endpoint, &self.telegram_api_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    url
                )));
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid(
                "retry_period must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Log file path, read before the rest of the configuration so that
/// configuration failures end up in the file too
pub fn log_file_from_env() -> String {
    std::env::var("LOG_FILE")
        .ok()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(vars: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_required_vars_present() {
        let vars = env(&[(API_TOKEN, "a"), (BOT_TOKEN, "b"), (CHAT_ID, "c")]);
        let config = load(&vars).unwrap();

        assert_eq!(config.api_token, "a");
        assert_eq!(config.bot_token, "b");
        assert_eq!(config.chat_id, "c");
        assert_eq!(config.status_endpoint, DEFAULT_STATUS_ENDPOINT);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_missing_var_reported() {
        let vars = env(&[(BOT_TOKEN, "b")]);

        match load(&vars) {
            Err(ConfigError::Missing(names)) => assert_eq!(names, vec![API_TOKEN, CHAT_ID]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_config_error_kind() {
        assert_eq!(ConfigError::Missing(vec![API_TOKEN]).kind(), ErrorKind::Config);
        assert_eq!(
            ConfigError::Invalid("bad".to_string()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_env_file_feeds_config() {
        let path = std::env::temp_dir().join(format!("hwstatus-{}.env", std::process::id()));
        std::fs::write(
            &path,
            "# credentials\nAPI_TOKEN=a\nBOT_TOKEN=\"b\"\nCHAT_ID=c\nRETRY_PERIOD=60\n",
        )
        .unwrap();

        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .map(|item| item.unwrap())
            .collect();
        std::fs::remove_file(&path).unwrap();

        let config = load(&vars).unwrap();
        assert_eq!(config.bot_token, "b");
        assert_eq!(config.retry_period, Duration::from_secs(60));
    }

    #[test]
    fn test_empty_var_counts_as_missing() {
        let vars = env(&[(API_TOKEN, "a"), (BOT_TOKEN, ""), (CHAT_ID, "c")]);

        match load(&vars) {
            Err(ConfigError::Missing(names)) => assert_eq!(names, vec![BOT_TOKEN]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_optional_overrides() {
        let vars = env(&[
            (API_TOKEN, "a"),
            (BOT_TOKEN, "b"),
            (CHAT_ID, "c"),
            ("STATUS_ENDPOINT", "http://localhost:9000/statuses/"),
            ("RETRY_PERIOD", "5"),
            ("REQUEST_TIMEOUT", "not-a-number"),
        ]);
        let config = load(&vars).unwrap();

        assert_eq!(config.status_endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation() {
        let vars = env(&[(API_TOKEN, "a"), (BOT_TOKEN, "b"), (CHAT_ID, "c")]);
        let mut config = load(&vars).unwrap();

        config.status_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.status_endpoint = DEFAULT_STATUS_ENDPOINT.to_string();
        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());

        config.retry_period = Duration::from_secs(1);
        assert!(config.validate().is_ok());
    }
}
