//! Client Configuration
//!
//! Resolves the backend endpoints from the environment with local
//! development defaults:
//!
//! - `TRAODOIDO_SERVER_URL` - REST base URL (default `http://127.0.0.1:8080`)
//! - `TRAODOIDO_WS_URL` - broker WebSocket URL; when unset it is derived
//!   from the server URL by switching the scheme and appending `/ws`

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Path of the broker WebSocket endpoint on the server
const WS_PATH: &str = "/ws";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        let mut builder = AppConfig::builder().server_url(
            std::env::var("TRAODOIDO_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
        );
        if let Ok(ws_url) = std::env::var("TRAODOIDO_WS_URL") {
            builder = builder.ws_url(ws_url);
        }
        let app = builder.build().unwrap_or_else(|_| {
            tracing::warn!("invalid endpoint configuration in environment, using defaults");
            AppConfig::default()
        });
        Self { app }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Broker WebSocket URL: the explicit override when configured,
    /// otherwise derived from the server URL
    pub fn broker_url(&self) -> String {
        match &self.app.ws_url {
            Some(url) => url.clone(),
            None => format!(
                "{}{}",
                self.server_url()
                    .replace("https://", "wss://")
                    .replace("http://", "ws://"),
                WS_PATH
            ),
        }
    }
}
