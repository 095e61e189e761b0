//! Chat endpoint configuration.

use std::env;
use std::time::Duration;

use crate::{ChatError, ChatResult};

/// Environment variable naming the webhook endpoint.
pub const WEBHOOK_URL_ENV: &str = "EMBERFORGE_CHAT_WEBHOOK_URL";

/// Environment variable overriding the response ceiling, in seconds.
pub const TIMEOUT_SECS_ENV: &str = "EMBERFORGE_CHAT_TIMEOUT_SECS";

/// How long a webhook exchange may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat endpoint configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Webhook endpoint receiving each message.
    pub webhook_url: String,
    /// Ceiling for one full exchange, connect through body.
    pub timeout: Duration,
}

impl ChatConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the response ceiling.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables. The webhook URL is
    /// required; the timeout falls back to [`DEFAULT_TIMEOUT`] when unset
    /// or unparseable.
    pub fn from_env() -> ChatResult<Self> {
        let webhook_url = env::var(WEBHOOK_URL_ENV)
            .map_err(|_| ChatError::Configuration(format!("{WEBHOOK_URL_ENV} is not set")))?;
        let timeout = env::var(TIMEOUT_SECS_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self {
            webhook_url,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::new("http://localhost:9000/webhook");

        assert_eq!(config.webhook_url, "http://localhost:9000/webhook");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env() {
        // No other test touches these variables.
        env::remove_var(WEBHOOK_URL_ENV);
        assert!(matches!(
            ChatConfig::from_env(),
            Err(ChatError::Configuration(_))
        ));

        env::set_var(WEBHOOK_URL_ENV, "http://localhost:9000/webhook");
        env::set_var(TIMEOUT_SECS_ENV, "5");
        let config = ChatConfig::from_env().unwrap();
        assert_eq!(config.webhook_url, "http://localhost:9000/webhook");
        assert_eq!(config.timeout, Duration::from_secs(5));

        env::set_var(TIMEOUT_SECS_ENV, "not a number");
        let config = ChatConfig::from_env().unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        env::remove_var(WEBHOOK_URL_ENV);
        env::remove_var(TIMEOUT_SECS_ENV);
    }
}
