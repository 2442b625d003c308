//! Shared Module
//!
//! Types and data structures used across the crate: wire models for the
//! backend REST resources, the push-notification payload, configuration
//! and the error taxonomy. Everything here is serialization-oriented and
//! free of I/O.

/// Wire models for backend resources
pub mod models;

/// Push-notification payload
pub mod notification;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ClientError;
pub use notification::NotificationEvent;
