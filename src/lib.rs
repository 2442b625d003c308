//! TraoDoiDo - Native Client Library
//!
//! Client library for the TraoDoiDo goods-exchange platform. The backend
//! (REST API plus a STOMP message broker reached over WebSocket) is a
//! remote service; this crate provides the pieces a native client needs
//! to talk to it.
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable types used across the crate
//!   - Wire models for posts, trades, meetings, conversations, etc.
//!   - Notification payloads, configuration, error types
//!
//! - **`client`** - HTTP boundary layer
//!   - Thin bearer-token wrappers around the backend REST endpoints
//!   - Credential storage and endpoint configuration
//!
//! - **`realtime`** - Push-notification session
//!   - `NotificationSession` owning the single broker connection and the
//!     single `/user/queue/notification` subscription
//!   - Minimal STOMP client framing
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use traodoido::client::{Config, TokenStore};
//! use traodoido::realtime::NotificationSession;
//!
//! # async fn example() -> Result<(), traodoido::shared::ClientError> {
//! let config = Config::from_env();
//! let tokens = TokenStore::new()?;
//! let session = NotificationSession::new(
//!     config,
//!     tokens,
//!     Arc::new(|text: &str| println!("{text}")),
//! );
//! session.connect().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T, ClientError>`; see
//! `shared::error` for the taxonomy. Transport handshake failures are
//! terminal per attempt, per-message parse failures are isolated and
//! logged.

/// Shared types and data structures
pub mod shared;

/// HTTP boundary layer (REST wrappers, credentials, configuration)
pub mod client;

/// Real-time notification session over the broker transport
pub mod realtime;
