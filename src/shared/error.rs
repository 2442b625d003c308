//! Shared Error Types
//!
//! One taxonomy for everything that can fail while talking to the
//! backend: HTTP wrappers, credential storage and the broker session all
//! return `ClientError`.
//!
//! # Error Categories
//!
//! - `Api` - the server answered with a non-success status
//! - `Network` - the HTTP request never completed
//! - `Transport` / `Handshake` - WebSocket-level failures
//! - `Parse` - malformed JSON or a malformed broker frame
//! - `NotAuthenticated` - an endpoint needs a bearer token and none is stored
//! - `Storage` - the credential file could not be read or written
//! - `Config` - invalid endpoint configuration
//!
//! Handshake failures are terminal for that connect attempt; parse
//! failures on individual broker messages are isolated by the session
//! and never surface through this type.

use thiserror::Error;

use crate::shared::config::ConfigError;

/// Errors produced by the client library
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status code
    #[error("server returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided error body, or the canonical status text
        message: String,
    },

    /// The HTTP request failed before a response arrived
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// WebSocket transport error outside the handshake
    #[error("transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// The broker handshake did not complete
    #[error("broker handshake failed: {message}")]
    Handshake {
        /// Human-readable error message
        message: String,
    },

    /// JSON or frame decoding failure
    #[error("parse error: {message}")]
    Parse {
        /// Human-readable error message
        message: String,
    },

    /// A bearer token is required but none is stored
    #[error("not authenticated")]
    NotAuthenticated,

    /// Credential storage could not be accessed
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Create an API error from a status code and server message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a handshake error
    pub fn handshake(message: impl Into<String>) -> Self {
        Self::Handshake {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(format!("JSON error: {}", err))
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::transport(err.to_string())
    }
}
